pub mod image_file_probe;
