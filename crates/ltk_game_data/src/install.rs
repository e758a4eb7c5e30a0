//! Locating a League of Legends installation.
//!
//! The extractor needs the installation root (the folder containing both
//! `LeagueClient` and `Game`), because the game-data WADs live under
//! `LeagueClient/Plugins/rcp-be-lol-game-data`.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use sysinfo::{Disks, System};

/// `LeagueClient/Plugins/rcp-be-lol-game-data` relative to the install root.
pub fn game_data_plugin_dir(install_root: &Utf8Path) -> Utf8PathBuf {
    install_root
        .join("LeagueClient")
        .join("Plugins")
        .join("rcp-be-lol-game-data")
}

/// Whether `install_root` contains the game-data plugin directory.
pub fn is_valid_install(install_root: &Utf8Path) -> bool {
    game_data_plugin_dir(install_root).as_std_path().is_dir()
}

/// Mount points of every disk, or the usual Windows drive letters if none are reported.
fn available_drives() -> Vec<String> {
    let disks = Disks::new_with_refreshed_list();

    let mut drives: Vec<String> = disks
        .iter()
        .filter_map(|disk| disk.mount_point().to_str().map(|s| s.to_string()))
        .collect();

    if drives.is_empty() && cfg!(target_os = "windows") {
        drives = ["C:", "D:", "E:", "F:"].into_iter().map(String::from).collect();
    }

    drives
}

/// Install roots listed under `associated_client` in a RiotClientInstalls.json document.
fn install_roots_from_riot_client_installs(contents: &str) -> Vec<Utf8PathBuf> {
    let Ok(data) = serde_json::from_str::<serde_json::Value>(contents) else {
        return Vec::new();
    };
    let Some(associated_client) = data.get("associated_client").and_then(|v| v.as_object())
    else {
        return Vec::new();
    };

    associated_client
        .keys()
        .map(|install_path| Utf8PathBuf::from(install_path.trim_end_matches(['/', '\\'])))
        // The exact folder name excludes the PBE client.
        .filter(|path| path.file_name() == Some("League of Legends"))
        .collect()
}

fn detect_from_riot_client_installs() -> Option<Utf8PathBuf> {
    let system_drive = std::env::var("SystemDrive").unwrap_or_else(|_| "C:".to_string());
    let riot_installs_path = Utf8PathBuf::from(format!("{}\\", system_drive))
        .join("ProgramData")
        .join("Riot Games")
        .join("RiotClientInstalls.json");

    let contents = fs::read_to_string(riot_installs_path.as_std_path()).ok()?;
    install_roots_from_riot_client_installs(&contents)
        .into_iter()
        .find(|root| is_valid_install(root))
}

/// Walk up from a running client or game executable to the install root.
fn detect_from_running_process() -> Option<Utf8PathBuf> {
    let system = System::new_all();

    let check_process = |name: &str, depth: usize| -> Option<Utf8PathBuf> {
        system.processes_by_name(name.as_ref()).find_map(|process| {
            let exe = process
                .exe()
                .and_then(|p| Utf8PathBuf::from_path_buf(p.to_path_buf()).ok())?;
            let root = exe.ancestors().nth(depth)?;
            is_valid_install(root).then(|| root.to_path_buf())
        })
    };

    // <root>/LeagueClient/LeagueClientUx.exe, <root>/Game/League of Legends.exe
    check_process("LeagueClientUx.exe", 2)
        .or_else(|| check_process("LeagueClient.exe", 2))
        .or_else(|| check_process("League of Legends.exe", 2))
}

fn detect_from_common_paths() -> Option<Utf8PathBuf> {
    available_drives().iter().find_map(|drive| {
        let drive_root = Utf8PathBuf::from(drive.trim_end_matches(['\\', '/']));
        [
            drive_root.join("Riot Games").join("League of Legends"),
            drive_root
                .join("Program Files")
                .join("Riot Games")
                .join("League of Legends"),
            drive_root
                .join("Program Files (x86)")
                .join("Riot Games")
                .join("League of Legends"),
        ]
        .into_iter()
        .find(|root| is_valid_install(root))
    })
}

/// Auto-detect the League of Legends install root.
///
/// Detection methods (in order of reliability):
/// 1. RiotClientInstalls.json
/// 2. Running client or game processes
/// 3. Common installation paths on every disk
pub fn auto_detect_install() -> Option<Utf8PathBuf> {
    let detected = detect_from_riot_client_installs()
        .or_else(detect_from_running_process)
        .or_else(detect_from_common_paths);

    match &detected {
        Some(root) => tracing::info!("Detected League of Legends at {}", root),
        None => tracing::debug!("No League of Legends installation detected"),
    }
    detected
}
