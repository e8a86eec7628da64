use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let git_commit = git_describe();
    println!("cargo:rustc-env=BUILD_INFO_GIT_COMMIT={git_commit}");

    let now = chrono::Local::now();
    let time_str = now.format("%Y-%m-%d %H:%M:%S").to_string();
    println!("cargo:rustc-env=BUILD_INFO_TIME={time_str}");

    let unix_time = u32::try_from(now.timestamp()).unwrap_or(0);
    println!("cargo:rustc-env=BUILD_INFO_UNIX_TIME={unix_time}");
}

fn git_describe() -> String {
    Command::new("git")
        .args(["describe", "--always", "--tags", "--dirty=-D", "--broken=-B"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout).ok()
            } else {
                None
            }
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
