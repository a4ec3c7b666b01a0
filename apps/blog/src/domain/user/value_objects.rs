use std::fmt;

/// Longest username the account store accepts
pub const USERNAME_MAX_LEN: usize = 150;

/// Username value object
///
/// # Invariants
/// - Between 1 and 150 characters long
/// - Only letters, digits and `@ . + - _`
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use blog::domain::user::Username;
    ///
    /// let username = Username::new("trump").expect("valid username");
    /// assert_eq!(username.as_str(), "trump");
    /// assert_eq!(username.display_name(), "TRUMP");
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, String> {
        let username = username.into();
        if Self::is_valid(&username) {
            Ok(Username(username))
        } else {
            Err(format!("Invalid username: {:?}", username))
        }
    }

    fn is_valid(username: &str) -> bool {
        let len = username.chars().count();
        (1..=USERNAME_MAX_LEN).contains(&len)
            && username
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    }

    /// Returns the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased form shown next to authored posts
    pub fn display_name(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
