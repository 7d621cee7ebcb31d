use std::fs::create_dir_all;
use std::io;
use std::path::Path;

pub fn path_to_str(path: &Path) -> Option<String> {
    path.to_str().map(String::from)
}

pub fn mkdirp<P: AsRef<Path>>(path: P) -> io::Result<()> {
    if let Err(e) = create_dir_all(path) {
        if e.kind() != io::ErrorKind::AlreadyExists {
            return Err(e);
        }
    }
    Ok(())
}
