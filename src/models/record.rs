use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record<A> {
    pub id: i64,
    pub attributes: A,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Collection<A> {
    #[serde(default)]
    pub data: Vec<Record<A>>,
}

// The gateway answers single reads with `data: null` for unknown ids.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<A> {
    pub data: Option<Record<A>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<P> {
    pub data: P,
}

impl<A> Collection<A> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
