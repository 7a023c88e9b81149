pub mod use_directory_loader;
