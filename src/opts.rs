/// Callback invoked when the flag it is registered under matches an argument
pub trait Handler {
    /// Handles one occurrence of the flag
    ///
    /// # Returns
    /// * `bool` - `true` to keep scanning, `false` to stop after this flag
    fn on_option(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Handler for F {
    fn on_option(&mut self) -> bool {
        self()
    }
}

/// A registered option: a flag character paired with its handler
pub struct Opt<'a> {
    name: char,
    handler: Box<dyn Handler + 'a>,
}

impl<'a> Opt<'a> {
    /// The flag character this option matches
    pub fn name(&self) -> char {
        self.name
    }

    pub(crate) fn on_option(&mut self) -> bool {
        self.handler.on_option()
    }
}

/// Represents the set of registered options, kept sorted by flag character
/// so lookups can binary search
#[derive(Default)]
pub struct OptionList<'a> {
    opts: Vec<Opt<'a>>,
    sorted: bool,
}

impl<'a> OptionList<'a> {
    /// Creates an empty option list
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a flag character
    ///
    /// # Arguments
    /// * `name` - The flag character to match
    /// * `handler` - Callback invoked on every match
    pub fn add(&mut self, name: char, handler: impl Handler + 'a) {
        self.opts.push(Opt {
            name,
            handler: Box::new(handler),
        });
        self.sorted = false;
    }

    /// Orders the options by ascending flag character; a no-op when nothing
    /// was added since the last call
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        self.opts.sort_by_key(|opt| opt.name);
        self.sorted = true;
    }

    /// Looks up an option by flag character
    ///
    /// The list must have been sorted first; `sort` is not called here
    pub fn find(&self, name: char) -> Option<&Opt<'a>> {
        debug_assert!(self.sorted);
        let at = self.opts.partition_point(|opt| opt.name < name);
        self.opts.get(at).filter(|opt| opt.name == name)
    }

    pub(crate) fn find_mut(&mut self, name: char) -> Option<&mut Opt<'a>> {
        debug_assert!(self.sorted);
        let at = self.opts.partition_point(|opt| opt.name < name);
        self.opts.get_mut(at).filter(|opt| opt.name == name)
    }

    /// Returns the number of registered options
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    /// Checks if no options are registered
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }
}
