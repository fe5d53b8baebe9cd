// build.rs
fn main() {
    println!("cargo:rerun-if-changed=assets/icon.ico");
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/icon.ico");    // multi-size .ico
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon embedding failed: {e}");
        }
    }
}
