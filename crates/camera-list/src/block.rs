use std::fmt;

/// One camera entry in the recorder's camera list: the prim path, the
/// render width and height, and an empty render product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraBlock<'a> {
    pub name: &'a str,
    pub size: i64,
}

impl<'a> CameraBlock<'a> {
    pub fn new(name: &'a str, size: i64) -> Self {
        Self { name, size }
    }
}

impl fmt::Display for CameraBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[\n    \"{name}\",\n    {size},\n    {size},\n    \"\"\n]",
            name = self.name,
            size = self.size
        )
    }
}

pub fn format_block(name: &str, size: i64) -> String {
    CameraBlock::new(name, size).to_string()
}
