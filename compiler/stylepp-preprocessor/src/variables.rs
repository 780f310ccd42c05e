use std::fmt::{Display, Formatter};

/// A registered `#define`. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: Vec<u8>,
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "name = {}, value = {}", self.name, String::from_utf8_lossy(&self.value))
    }
}

/// Returned by [`VariableTable::define`] when every slot is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull {
    pub capacity: usize,
}

/// Insertion-ordered variables with a hard capacity.
///
/// Redefining a name appends a second entry; lookups return the first entry, so the earliest
/// definition of a name is the one that substitutes.
#[derive(Debug, Clone)]
pub struct VariableTable {
    variables: Vec<Variable>,
    capacity: usize,
}

impl VariableTable {
    pub fn new(capacity: usize) -> Self {
        VariableTable {
            variables: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.variables.len() >= self.capacity
    }

    pub fn get(&self, name: &[u8]) -> Option<&Variable> {
        self.variables.iter().find(|var| var.name.as_bytes() == name)
    }

    pub fn define(&mut self, name: &[u8], value: Vec<u8>) -> Result<(), TableFull> {
        if self.is_full() {
            return Err(TableFull {
                capacity: self.capacity,
            });
        }

        self.variables.push(Variable {
            name: String::from_utf8_lossy(name).into_owned(),
            value,
        });

        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }
}
