use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use crate::command::Command;
use crate::shape::Circle;

/// Holder for the demo's one circle and its command log.
///
/// Constructed exactly once at process start and passed by reference to
/// whoever needs it; lives for the whole process with no teardown. The
/// circle slot starts empty. Single-threaded use only.
pub struct DemoRegistry {
    circle: Option<Rc<RefCell<Circle>>>,
    commands: Vec<Box<dyn Command>>,
}

impl DemoRegistry {
    pub fn new() -> Self {
        debug!("registry constructed");
        Self {
            circle: None,
            commands: Vec::new(),
        }
    }

    /// Installs or replaces the registered circle.
    pub fn install_circle(&mut self, circle: Rc<RefCell<Circle>>) {
        self.circle = Some(circle);
    }

    pub fn circle(&self) -> Option<&Rc<RefCell<Circle>>> {
        self.circle.as_ref()
    }

    pub fn push_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    pub fn pop_command(&mut self) -> Option<Box<dyn Command>> {
        self.commands.pop()
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}
