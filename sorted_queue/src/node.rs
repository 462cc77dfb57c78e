pub type Link<T> = Option<Box<Node<T>>>;

pub struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

// unlinks one node at a time so that long chains don't recurse in drop glue
pub fn unlink_all<T>(mut link: Link<T>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}
