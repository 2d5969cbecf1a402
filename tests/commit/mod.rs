mod commit_staged_files_successfully;
mod commit_without_staged_files_fails;
