use tempfile::TempDir;

use vocal_api::application::services::AudioWorkspace;
use vocal_api::domain::UploadId;

#[test]
fn given_scratch_root_when_creating_workspace_then_directory_exists_under_root() {
    let root = TempDir::new().unwrap();
    let upload_id = UploadId::new();

    let workspace = AudioWorkspace::create(root.path(), upload_id).unwrap();

    assert!(workspace.path().is_dir());
    assert!(workspace.path().starts_with(root.path()));
    let name = workspace.path().file_name().unwrap().to_str().unwrap();
    assert!(name.contains(&upload_id.as_uuid().simple().to_string()));
}

#[test]
fn given_missing_scratch_root_when_creating_workspace_then_root_is_created() {
    let root = TempDir::new().unwrap();
    let nested = root.path().join("nested").join("scratch");

    let workspace = AudioWorkspace::create(&nested, UploadId::new()).unwrap();

    assert!(workspace.path().starts_with(&nested));
}

#[test]
fn given_same_upload_id_when_creating_two_workspaces_then_paths_differ() {
    let root = TempDir::new().unwrap();
    let upload_id = UploadId::new();

    let first = AudioWorkspace::create(root.path(), upload_id).unwrap();
    let second = AudioWorkspace::create(root.path(), upload_id).unwrap();

    assert_ne!(first.path(), second.path());
}

#[test]
fn given_workspace_with_files_when_dropped_then_everything_is_removed() {
    let root = TempDir::new().unwrap();
    let workspace = AudioWorkspace::create(root.path(), UploadId::new()).unwrap();
    let path = workspace.path().to_path_buf();
    std::fs::write(workspace.file("upload.mp3"), b"mp3").unwrap();
    std::fs::write(workspace.file("converted.wav"), b"wav").unwrap();

    drop(workspace);

    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 0);
}

#[test]
fn given_workspace_already_removed_when_dropped_then_does_not_panic() {
    let root = TempDir::new().unwrap();
    let workspace = AudioWorkspace::create(root.path(), UploadId::new()).unwrap();
    std::fs::remove_dir_all(workspace.path()).unwrap();

    drop(workspace);
}
