use std::error::Error;
use std::fs;
use std::path::Path;

/// Copies the compiled frontend into `static/dist` so it can be embedded.
/// Without a frontend build the directory is still created, leaving the
/// backend to answer unknown paths with 404.
fn main() -> Result<(), Box<dyn Error>> {
    let static_dir = Path::new("static");
    let embedded_dir = static_dir.join("dist");
    let frontend_dist = Path::new("../frontend/dist");

    if frontend_dist.exists() {
        let _ = fs::remove_dir_all(&embedded_dir);
        fs::create_dir_all(static_dir)?;
        fs_extra::dir::copy(
            frontend_dist,
            static_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true),
        )?;
    } else {
        fs::create_dir_all(&embedded_dir)?;
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
    Ok(())
}
