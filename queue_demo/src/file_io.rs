use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub fn create_file_buf_write<P: AsRef<Path>>(path: P) -> io::Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

pub fn open_file_buf_read<P: AsRef<Path>>(path: P) -> io::Result<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

pub fn read_text<P: AsRef<Path>>(path: P) -> io::Result<String> {
    let mut text = String::new();
    open_file_buf_read(path)?.read_to_string(&mut text)?;
    Ok(text)
}

pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> io::Result<()> {
    let mut writer = create_file_buf_write(path)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
