use std::rc::Rc;

/// Single-slot register holding the most recently selected value.
///
/// Reading before the first write yields `None`. Writers never wait on
/// readers: a handle already taken by an in-flight submission stays valid
/// after the slot is overwritten.
pub struct FileSlot<T: ?Sized> {
    current: Option<Rc<T>>,
}

impl<T: ?Sized> Default for FileSlot<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: ?Sized> FileSlot<T> {
    pub fn replace(&mut self, value: Rc<T>) {
        self.current = Some(value);
    }

    pub fn current(&self) -> Option<Rc<T>> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_until_written() {
        let slot: FileSlot<str> = FileSlot::default();
        assert!(slot.current().is_none());
    }

    #[test]
    fn last_writer_wins() {
        let mut slot: FileSlot<str> = FileSlot::default();
        slot.replace(Rc::from("dropped.csv"));
        let taken = slot.current().unwrap();
        slot.replace(Rc::from("picked.csv"));

        assert_eq!(&*slot.current().unwrap(), "picked.csv");
        assert_eq!(&*taken, "dropped.csv");
    }
}
