// README-to-rustdoc helpers shared by the crate build scripts.
// Pull in with: include!("../build_common.rs");
//
// The including build.rs must import:
//   use std::env;
//   use std::fs;
//   use std::path::Path;

/// Copy `README.md` into `OUT_DIR/README_GENERATED.md` with links rewritten
/// for rustdoc.
///
/// - `](src/foo.rs)` becomes `](foo)` so module links resolve
/// - `](../../README.md)` becomes the workspace `repository` URL
///
/// A crate without a README gets an empty generated file, so the
/// `include_str!` in its `lib.rs` still compiles.
fn process_readme_for_rustdoc(crate_dir: &str) {
    println!("cargo:rerun-if-changed=README.md");
    println!("cargo:rerun-if-changed=../../Cargo.toml");

    let readme = fs::read_to_string(Path::new(crate_dir).join("README.md")).unwrap_or_default();
    let repo_url = workspace_repository(crate_dir);
    let rendered = rewrite_readme_links(&readme, repo_url.as_deref());

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("README_GENERATED.md"), rendered)
        .expect("OUT_DIR is writable");
}

fn rewrite_readme_links(readme: &str, repo_url: Option<&str>) -> String {
    let mut text = readme
        .replace("](src/", "](")
        .replace("/mod.rs)", ")")
        .replace(".rs)", ")");
    if let Some(url) = repo_url {
        text = text.replace("](../../README.md", &format!("]({url}"));
    }
    text
}

/// `repository = "..."` from the workspace manifest two levels up.
fn workspace_repository(crate_dir: &str) -> Option<String> {
    let manifest = Path::new(crate_dir).parent()?.parent()?.join("Cargo.toml");
    let content = fs::read_to_string(manifest).ok()?;

    content.lines().map(str::trim).find_map(|line| {
        let value = line.strip_prefix("repository")?.trim_start().strip_prefix('=')?;
        let value = value.trim();
        value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .map(str::to_string)
    })
}
