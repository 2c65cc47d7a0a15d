/// Integer helpers.
///
/// This module converts literal text into values and maps checked integer
/// arithmetic onto evaluation errors, so overflow is reported instead of
/// wrapping or panicking.
pub mod num;
