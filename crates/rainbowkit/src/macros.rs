#[macro_export]
/// Build a [`ThemeVars`](crate::theme::ThemeVars) from `Key => value` pairs.
///
/// Keys are [`ThemeVar`](crate::theme::ThemeVar) variant names, values
/// anything that converts into a `String`.
///
/// ```
/// use rainbowkit::{theme_vars, ThemeVar};
///
/// let vars = theme_vars! {
///     AccentColor => "#7b3fe4",
///     ModalRadius => "16px",
/// };
/// assert_eq!(vars.get(ThemeVar::AccentColor), Some("#7b3fe4"));
/// assert_eq!(vars.len(), 2);
/// ```
///
/// ## Without the macro
/// ```
/// use rainbowkit::{ThemeVar, ThemeVars};
///
/// let vars = ThemeVars::new()
///     .with(ThemeVar::AccentColor, "#7b3fe4")
///     .with(ThemeVar::ModalRadius, "16px");
/// assert_eq!(vars.len(), 2);
/// ```
macro_rules! theme_vars {
    () => {
        $crate::theme::ThemeVars::new()
    };
    ($($key:ident => $value:expr),+ $(,)?) => {
        $crate::theme::ThemeVars::new()
            $(.with($crate::theme::ThemeVar::$key, $value))+
    };
}
