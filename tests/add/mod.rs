mod concurrent_add_operations_keep_every_entry;
