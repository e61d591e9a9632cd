//! The set of optional hooks supplied to a single run.

use super::definitions::HookStage;

/// A boxed hook borrowed for the duration of one run.
pub type HookFn<'h, R, E> = Box<dyn FnMut(&mut R) -> Result<(), E> + 'h>;

/// Which implementation performs the main step of a run.
pub enum Primary<'h, R, E> {
    /// Use the runner's built-in default processing.
    Default,
    /// Use a caller-supplied override.
    Custom(HookFn<'h, R, E>),
}

impl<R, E> Primary<'_, R, E> {
    /// Returns whether a caller override is selected.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Returns the stage this choice executes as.
    pub fn stage(&self) -> HookStage {
        match self {
            Self::Default => HookStage::Default,
            Self::Custom(_) => HookStage::Primary,
        }
    }
}

impl<R, E> std::fmt::Debug for Primary<'_, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(<closure>)"),
        }
    }
}

/// Optional `before`, `primary`, and `after` operations for one run.
///
/// ```rust,ignore
/// let hooks = Hooks::new()
///     .before(|record: &mut Record| sink.write("saving"))
///     .after(|record: &mut Record| sink.write("saved"));
/// runner.run(&mut record, hooks)?;
/// ```
pub struct Hooks<'h, R, E> {
    before: Option<HookFn<'h, R, E>>,
    primary: Primary<'h, R, E>,
    after: Option<HookFn<'h, R, E>>,
}

impl<'h, R, E> Hooks<'h, R, E> {
    /// Creates an empty hook set: no `before`, default primary, no `after`.
    pub fn new() -> Self {
        Self {
            before: None,
            primary: Primary::Default,
            after: None,
        }
    }

    /// Sets the hook that runs before the main step.
    pub fn before<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut R) -> Result<(), E> + 'h,
    {
        self.before = Some(Box::new(hook));
        self
    }

    /// Overrides the runner's default processing.
    pub fn primary<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut R) -> Result<(), E> + 'h,
    {
        self.primary = Primary::Custom(Box::new(hook));
        self
    }

    /// Sets the hook that runs after the main step.
    pub fn after<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut R) -> Result<(), E> + 'h,
    {
        self.after = Some(Box::new(hook));
        self
    }

    /// Returns whether a `before` hook is set.
    pub fn has_before(&self) -> bool {
        self.before.is_some()
    }

    /// Returns whether an `after` hook is set.
    pub fn has_after(&self) -> bool {
        self.after.is_some()
    }

    /// Returns the main-step selection.
    pub fn primary_choice(&self) -> &Primary<'h, R, E> {
        &self.primary
    }

    /// Splits the set into its three slots.
    pub fn into_parts(
        self,
    ) -> (
        Option<HookFn<'h, R, E>>,
        Primary<'h, R, E>,
        Option<HookFn<'h, R, E>>,
    ) {
        (self.before, self.primary, self.after)
    }
}

impl<R, E> Default for Hooks<'_, R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, E> std::fmt::Debug for Hooks<'_, R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("before", &self.before.as_ref().map(|_| "<closure>"))
            .field("primary", &self.primary)
            .field("after", &self.after.as_ref().map(|_| "<closure>"))
            .finish()
    }
}
