//! Pattern 3: Composite
//!
//! Files and directories behind one component trait. A directory holds
//! boxed children and answers the same questions a file does; rendering
//! walks the tree depth-first, one indented line per node.

pub trait FsNode {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    fn render(&self, depth: usize) -> Vec<String>;
}

pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        File {
            name: name.into(),
            size,
        }
    }
}

impl FsNode for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn render(&self, depth: usize) -> Vec<String> {
        vec![format!("{}- {} ({} bytes)", "  ".repeat(depth), self.name, self.size)]
    }
}

pub struct Directory {
    name: String,
    children: Vec<Box<dyn FsNode>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(mut self, child: Box<dyn FsNode>) -> Self {
        self.children.push(child);
        self
    }
}

impl FsNode for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|c| c.size()).sum()
    }

    fn render(&self, depth: usize) -> Vec<String> {
        let mut lines = vec![format!("{}+ {}/", "  ".repeat(depth), self.name)];
        for child in &self.children {
            lines.extend(child.render(depth + 1));
        }
        lines
    }
}
