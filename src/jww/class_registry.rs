use std::collections::HashMap;

use crate::{JwwError, JwwResult};

/// A persistent identifier from the MFC `CArchive` serialization.
///
/// One counter assigns PIDs to class definitions *and* object instances, in
/// stream order.  The newtype exists so the two advance points below are the
/// only way the counter moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Pid(u16);

/// Maps class PIDs to class names for one decoding session.
///
/// The protocol: defining a class binds the next PID to its name and
/// advances; finishing an object instance advances without binding (the
/// instance's PID is never referenced but must stay allocated so later class
/// PIDs line up); a null marker does not advance at all.
pub(crate) struct ClassRegistry {
    classes: HashMap<Pid, String>,
    next_pid: Pid,
}

impl ClassRegistry {
    pub fn new() -> Self {
        ClassRegistry {
            classes: HashMap::new(),
            next_pid: Pid(1),
        }
    }
    pub fn define_class(&mut self, name: String) {
        self.classes.insert(self.next_pid, name);
        self.next_pid.0 += 1;
    }
    pub fn note_instance(&mut self) {
        self.next_pid.0 += 1;
    }
    /// Resolves a class-reference tag (`0x8000 | pid`) to the class name.
    pub fn resolve(&self, tag: u16) -> JwwResult<&str> {
        let pid = Pid(tag & 0x7FFF);
        match self.classes.get(&pid) {
            Some(name) => Ok(name),
            None => {
                let mut known: Vec<u16> = self.classes.keys().map(|p| p.0).collect();
                known.sort_unstable();
                Err(JwwError::UnknownClassPid { pid: pid.0, known })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_definitions_resolve_by_pid() {
        let mut registry = ClassRegistry::new();
        registry.define_class(String::from("CDataSen"));
        assert_eq!("CDataSen", registry.resolve(0x8001).unwrap());
    }

    #[test]
    fn instances_consume_a_pid_slot() {
        let mut registry = ClassRegistry::new();
        registry.define_class(String::from("CDataSen")); // PID 1
        registry.note_instance(); // PID 2
        registry.define_class(String::from("CDataEnko")); // PID 3
        assert_eq!("CDataSen", registry.resolve(0x8001).unwrap());
        assert_eq!("CDataEnko", registry.resolve(0x8003).unwrap());
    }

    #[test]
    fn dangling_references_list_known_pids() {
        let mut registry = ClassRegistry::new();
        registry.define_class(String::from("CDataSen")); // PID 1
        registry.note_instance(); // PID 2
        registry.define_class(String::from("CDataTen")); // PID 3
        match registry.resolve(0x8002) {
            Err(JwwError::UnknownClassPid { pid, known }) => {
                assert_eq!(2, pid);
                assert_eq!(vec![1, 3], known);
            }
            other => panic!("expected dangling PID error, got {:?}", other.map(|_| ())),
        }
    }
}
