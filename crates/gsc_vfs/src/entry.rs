//! Insertion-ordered directory tree over the archive's FAT.

use std::collections::HashMap;

use crate::container::Container;
use crate::error::VfsError;

/// Index of a node inside the tree arena.
pub(crate) type NodeId = usize;

/// One tree node: a directory or a file backed by a FAT record.
#[derive(Debug, Clone)]
pub(crate) struct Node {
	pub(crate) name: String,
	pub(crate) path: String,
	pub(crate) is_dir: bool,
	/// FAT index for file nodes
	pub(crate) fat: Option<usize>,
	/// Children in FAT insertion order
	pub(crate) children: Vec<NodeId>,
	by_name: HashMap<String, NodeId>,
}

impl Node {
	fn dir(name: &str, path: String) -> Self {
		Self {
			name: name.to_string(),
			path,
			is_dir: true,
			fat: None,
			children: Vec::new(),
			by_name: HashMap::new(),
		}
	}

	fn file(name: &str, path: String, fat: usize) -> Self {
		Self {
			name: name.to_string(),
			path,
			is_dir: false,
			fat: Some(fat),
			children: Vec::new(),
			by_name: HashMap::new(),
		}
	}
}

/// The whole tree: an arena of nodes plus a canonical-path index.
///
/// Every directory and file path resolves through the index, so lookups
/// stay O(1) regardless of depth. Duplicate names under one parent keep
/// the first occurrence.
#[derive(Debug, Clone)]
pub(crate) struct DirTree {
	nodes: Vec<Node>,
	index: HashMap<String, NodeId>,
}

const ROOT: NodeId = 0;

impl DirTree {
	pub(crate) fn new() -> Self {
		let root = Node::dir("", "/".to_string());
		Self {
			nodes: vec![root],
			index: HashMap::from([("/".to_string(), ROOT)]),
		}
	}

	pub(crate) fn root(&self) -> NodeId {
		ROOT
	}

	pub(crate) fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id]
	}

	pub(crate) fn lookup(&self, path: &str) -> Option<NodeId> {
		self.index.get(path).copied()
	}

	/// Inserts a file at a canonical `/`-separated path, creating the
	/// intermediate directories. The first entry at a given path wins.
	pub(crate) fn insert_file(&mut self, path: &str, fat: usize) {
		let mut parent = ROOT;
		let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();

		for (i, component) in components.iter().enumerate() {
			if i + 1 == components.len() {
				let node = Node::file(component, path.to_string(), fat);
				self.add_child(parent, node);
			} else {
				parent = self.make_dir(parent, component);
			}
		}
	}

	/// Returns the child directory `name` of `parent`, creating it if absent.
	fn make_dir(&mut self, parent: NodeId, name: &str) -> NodeId {
		if let Some(&existing) = self.nodes[parent].by_name.get(name) {
			return existing;
		}

		let path = join(&self.nodes[parent].path, name);
		let node = Node::dir(name, path);
		self.add_child(parent, node)
	}

	/// Attaches `node` under `parent`, registering its path in the index.
	/// A name collision leaves the existing child in place.
	fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
		if let Some(&existing) = self.nodes[parent].by_name.get(&node.name) {
			return existing;
		}

		let id = self.nodes.len();
		self.index.entry(node.path.clone()).or_insert(id);
		self.nodes[parent].by_name.insert(node.name.clone(), id);
		self.nodes[parent].children.push(id);
		self.nodes.push(node);
		id
	}
}

fn join(base: &str, name: &str) -> String {
	if base == "/" {
		format!("/{name}")
	} else {
		format!("{base}/{name}")
	}
}

/// A file or directory inside a [`Container`].
///
/// Entries are lightweight views; they borrow the container and may be
/// copied freely.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
	container: &'a Container,
	id: NodeId,
}

impl<'a> Entry<'a> {
	pub(crate) fn new(container: &'a Container, id: NodeId) -> Self {
		Self {
			container,
			id,
		}
	}

	fn node(&self) -> &'a Node {
		self.container.tree().node(self.id)
	}

	/// Base name of the entry; empty for the root.
	pub fn name(&self) -> &'a str {
		&self.node().name
	}

	/// Canonical `/`-separated logical path.
	pub fn path(&self) -> &'a str {
		&self.node().path
	}

	/// Returns `true` for directories.
	pub fn is_dir(&self) -> bool {
		self.node().is_dir
	}

	/// Payload size in bytes; zero for directories.
	pub fn size(&self) -> u64 {
		match self.node().fat {
			Some(fat) => u64::from(self.container.fat()[fat].size),
			None => 0,
		}
	}

	/// Identity hash from the FAT, as lowercase hex; empty for directories.
	pub fn hash(&self) -> String {
		match self.node().fat {
			Some(fat) => hex::encode(self.container.fat()[fat].hash),
			None => String::new(),
		}
	}

	/// Children in insertion order; empty for files.
	pub fn entries(self) -> impl Iterator<Item = Entry<'a>> {
		self.node().children.iter().map(move |&id| Entry::new(self.container, id))
	}

	/// Opens this entry for reading.
	///
	/// # Errors
	///
	/// Returns [`VfsError::InvalidArgument`] for directories.
	pub fn open(&self) -> Result<crate::container::OpenFile<'a>, VfsError> {
		self.container.open(self.path())
	}
}

impl std::fmt::Display for Entry<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_dir() {
			write!(f, "{}/", self.path())
		} else {
			write!(f, "{} ({} bytes)", self.path(), self.size())
		}
	}
}
