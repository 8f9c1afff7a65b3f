// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use std::{fs::create_dir_all, path::PathBuf};

pub fn get_path(test_folder_name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("xc_score_storage_tests");
    path.push(test_folder_name);
    path
}

pub fn setup_empty_test_folder(test_folder_name: &str) -> PathBuf {
    let path = get_path(test_folder_name);
    if let Ok(true) = std::fs::exists(&path) {
        std::fs::remove_dir_all(&path).unwrap_or_else(|e| {
            panic!(
                "Failed to clean test folder {}. Error: {e}",
                path.to_string_lossy()
            )
        });
    }
    create_dir_all(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to create test folder {}. Error: {e}",
            path.to_string_lossy()
        )
    });
    path
}

pub fn create_file(folder: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let mut file_name = folder.to_path_buf();
    file_name.push(name);
    std::fs::write(&file_name, content).unwrap_or_else(|e| {
        panic!(
            "Failed to write file {}. Error: {e}",
            file_name.to_string_lossy()
        )
    });
    file_name
}
