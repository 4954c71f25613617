/// Suffix appended to the label by [`Greeter::bye`].
pub const BYE_SUFFIX: &str = " bye";

/// Fixed reply of [`Greeter::hi`].
pub const HI: &str = "hi!!";

/// A greeter that remembers the label it was built with
///
/// # Examples
///
/// ```
/// use greeter_rs::Greeter;
///
/// let greeter = Greeter::new("hello");
/// assert_eq!(greeter.hello(), "hello");
/// assert_eq!(greeter.bye(), "hello bye");
/// assert_eq!(Greeter::hi(), "hi!!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Greeter {
    label: String,
}

impl Greeter {
    /// Any string is accepted, the empty one included.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Returns the label unchanged.
    pub fn hello(&self) -> &str {
        &self.label
    }

    /// Returns the label followed by `" bye"`.
    pub fn bye(&self) -> String {
        format!("{}{}", self.label, BYE_SUFFIX)
    }

    /// Type-level greeting, independent of any instance.
    pub fn hi() -> &'static str {
        HI
    }
}

impl From<String> for Greeter {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&str> for Greeter {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl AsRef<str> for Greeter {
    fn as_ref(&self) -> &str {
        &self.label
    }
}
