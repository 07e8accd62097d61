use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=tailwind.css");
    println!("cargo:rerun-if-changed=tailwind.config.js");
    println!("cargo:rerun-if-changed=src/ui");

    // Regenerate assets/tailwind.css when the tailwind CLI is available. The
    // checked-in copy is used otherwise.
    let output = Command::new("npx")
        .args(["--no", "tailwindcss"])
        .args(["-i", "tailwind.css", "-o", "assets/tailwind.css"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Failed to generate Tailwind CSS, using checked-in assets/tailwind.css");
            println!(
                "cargo:warning=STDERR: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Err(e) => {
            println!("cargo:warning=Failed to run tailwindcss ({}), using checked-in assets/tailwind.css", e);
        }
    }
}
