fn main() {
    // Compile Slint UI files
    slint_build::compile("ui/main.slint").unwrap();

    // Embed Windows resources (icon, version info)
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/caldb.ico");
        res.set("ProductName", "CalSync");
        res.set("FileDescription", "CalSync tray shell");
        res.set("CompanyName", "CalSync Contributors");
        res.set("LegalCopyright", "Copyright © 2026 CalSync Contributors");
        res.set("OriginalFilename", "calsync.exe");
        res.set("FileVersion", env!("CARGO_PKG_VERSION"));
        res.set("ProductVersion", env!("CARGO_PKG_VERSION"));
        res.compile().unwrap();
    }
}
