// Storefront - Build Task Runner
// Unified build system using cargo xtask pattern

use anyhow::{Context, Result};
use xshell::{Shell, cmd};

fn main() -> Result<()> {
    let sh = Shell::new()?;
    let args: Vec<_> = std::env::args().skip(1).collect();

    match args.first().map(|s| s.as_str()) {
        Some("build") => {
            let release = args.contains(&"--release".to_string());
            build(&sh, release)
        },
        Some("test") => test(&sh),
        Some("format") => {
            let check = args.contains(&"--check".to_string());
            format(&sh, check)
        },
        Some("clippy") => clippy(&sh),
        Some("run") => run(&sh, &args[1..]),
        Some("seed") => match args.get(1) {
            Some(file) => seed(&sh, file),
            None => {
                eprintln!("Error: seed requires a JSON file");
                eprintln!("Usage: cargo xtask seed <file.json>");
                std::process::exit(1);
            },
        },
        Some("clean") => clean(&sh),
        Some("ci") => ci(&sh),
        Some("dist") => dist(&sh),
        _ => {
            print_help();
            Ok(())
        },
    }
}

fn print_help() {
    println!("Storefront - Build Commands:");
    println!();
    println!("Usage: cargo xtask <COMMAND> [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  build [--release]   Build the backend");
    println!("  test                Run all tests");
    println!("  format [--check]    Format code (check mode doesn't modify)");
    println!("  clippy              Run clippy checks");
    println!("  run [ARGS...]       Build and run the server");
    println!("  seed <file.json>    Import products into the configured database");
    println!("  clean               Clean build artifacts");
    println!("  ci                  Run all CI checks (format + clippy + build + test)");
    println!("  dist                Create distribution package (tar.gz)");
    println!();
    println!("Examples:");
    println!("  cargo xtask build --release");
    println!("  cargo xtask seed backend/seed/products.json");
}

/// Build backend using cargo
fn build(sh: &Shell, release: bool) -> Result<()> {
    println!("🦀 Building storefront{}...", if release { " (release)" } else { "" });

    let _dir = sh.push_dir(project_root());
    if release {
        cmd!(sh, "cargo build --release -p storefront")
            .run()
            .context("Failed to build backend in release mode")?;
        create_distribution(sh)?;
    } else {
        cmd!(sh, "cargo build -p storefront")
            .run()
            .context("Failed to build backend")?;
    }

    println!("✅ Build complete");
    Ok(())
}

/// Create distribution package structure
fn create_distribution(sh: &Shell) -> Result<()> {
    let project = project_root();
    let dist_dir = project.join("build/dist");

    for dir in ["bin", "conf", "data", "logs", "public"] {
        let path = dist_dir.join(dir);
        cmd!(sh, "mkdir -p {path}").run()?;
    }

    let binary_src = project.join("target/release/storefront");
    let binary_dst = dist_dir.join("bin/storefront");
    cmd!(sh, "cp {binary_src} {binary_dst}").run()?;

    let config_src = project.join("conf/config.toml");
    let config_dst = dist_dir.join("conf/config.toml");
    cmd!(sh, "cp {config_src} {config_dst}").run()?;

    let public_src = project.join("public");
    let public_dst = dist_dir.join("public");
    if public_src.exists() {
        cmd!(sh, "cp -r {public_src}/. {public_dst}/").run()?;
    }

    Ok(())
}

/// Run all tests
fn test(sh: &Shell) -> Result<()> {
    println!("🧪 Running tests...");

    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo test --workspace").run().context("Tests failed")?;

    println!("✅ All tests passed!");
    Ok(())
}

/// Format code
fn format(sh: &Shell, check: bool) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    if check {
        cmd!(sh, "cargo fmt --all -- --check")
            .run()
            .context("Rust code is not formatted")?;
        println!("✅ Rust code is properly formatted");
    } else {
        cmd!(sh, "cargo fmt --all").run().context("Failed to format Rust code")?;
        println!("✅ Rust code formatted");
    }

    Ok(())
}

/// Run clippy checks
fn clippy(sh: &Shell) -> Result<()> {
    let _dir = sh.push_dir(project_root());

    cmd!(sh, "cargo clippy --workspace --all-targets -- --deny warnings --allow clippy::uninlined-format-args")
        .run()
        .context("Clippy checks failed")?;

    Ok(())
}

/// Build and run the server
fn run(sh: &Shell, args: &[String]) -> Result<()> {
    println!("🚀 Running storefront...");

    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo run -p storefront -- {args...}")
        .run()
        .context("Failed to run application")?;

    Ok(())
}

/// Import products from a JSON file
fn seed(sh: &Shell, file: &str) -> Result<()> {
    let _dir = sh.push_dir(project_root());
    cmd!(sh, "cargo run -p storefront -- seed {file}")
        .run()
        .context("Failed to seed catalog")?;

    Ok(())
}

/// Clean build artifacts
fn clean(sh: &Shell) -> Result<()> {
    println!("🧹 Cleaning build artifacts...");

    let project = project_root();
    let _dir = sh.push_dir(&project);
    cmd!(sh, "cargo clean").run()?;

    let build_dir = project.join("build");
    if build_dir.exists() {
        cmd!(sh, "rm -rf {build_dir}").run()?;
    }

    println!("✅ Clean complete!");
    Ok(())
}

/// Run all CI checks (format + clippy + build + test)
fn ci(sh: &Shell) -> Result<()> {
    println!("📝 [1/4] Checking code format...");
    format(sh, true)?;

    println!("🔍 [2/4] Running clippy checks...");
    clippy(sh)?;

    println!("🔨 [3/4] Building project...");
    build(sh, true)?;

    println!("🧪 [4/4] Running tests...");
    test(sh)?;

    println!("🎉 CI pipeline completed successfully!");
    Ok(())
}

/// Create distribution package (tar.gz)
fn dist(sh: &Shell) -> Result<()> {
    build(sh, true)?;

    let dist_dir = project_root().join("build/dist");
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let package_name = format!("storefront-{}.tar.gz", timestamp);
    let package_path = dist_dir.join(&package_name);

    println!("📋 Creating tarball: {}...", package_name);

    let _dir = sh.push_dir(&dist_dir);
    cmd!(sh, "tar czf {package_name} bin conf data logs public")
        .run()
        .context("Failed to create tarball")?;

    println!("✅ Distribution package created: {}", package_path.display());
    Ok(())
}

/// Get project root directory
fn project_root() -> std::path::PathBuf {
    std::path::Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(|path| path.to_path_buf())
        .unwrap_or_default()
}
