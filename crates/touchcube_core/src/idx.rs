/// Defines newtype wrappers around primitive unsigned integers, for use as
/// stable handles into the cube's arenas.
macro_rules! idx_struct {
    (
        $(
            $(#[$attr:meta])*
            $struct_vis:vis struct $struct_name:ident($inner_vis:vis $inner_type:ty);
        )+
    ) => {
        $(
            $(#[$attr])*
            #[derive(Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
            #[repr(transparent)]
            $struct_vis struct $struct_name($inner_vis $inner_type);

            impl ::std::fmt::Debug for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{:?}", self.0)
                }
            }
            impl ::std::fmt::Display for $struct_name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "#{}", self.0)
                }
            }

            impl $struct_name {
                /// Returns the ID as an index into an arena.
                pub const fn index(self) -> usize {
                    self.0 as usize
                }
                /// Constructs an ID from an index, or returns `None` if it does
                /// not fit.
                pub fn try_from_index(index: usize) -> Option<Self> {
                    <$inner_type>::try_from(index).ok().map(Self)
                }
            }
        )+
    };
}
