//! Host-side helper: `cargo run` builds the wasm bundle into `static/pkg` and
//! serves `static/` locally for development.

use std::process::{Command, Stdio};
use std::{thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    if cfg!(target_arch = "wasm32") {
        return;
    }

    // 1. Compile the wasm bundle next to index.html
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!(
                "wasm-pack finished with errors. \
                 Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/)."
            );
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!(
                "wasm-pack not found in PATH. \
                 Skipping wasm build; the site may serve stale artifacts."
            );
        }
    }

    // 2. Serve `static/`
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let mut server = match Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    {
        Ok(child) => child,
        Err(err) => {
            eprintln!("failed to start http server: {err}");
            std::process::exit(1);
        }
    };

    // Keep process alive while the server runs
    loop {
        match server.try_wait() {
            Ok(Some(status)) => {
                eprintln!("http server exited: {status}");
                return;
            }
            Ok(None) => thread::sleep(Duration::from_secs(1)),
            Err(err) => {
                eprintln!("lost track of http server: {err}");
                return;
            }
        }
    }
}
