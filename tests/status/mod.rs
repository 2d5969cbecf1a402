mod list_staged_files;
