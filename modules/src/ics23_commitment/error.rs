use flex_error::define_error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        EmptyPrefix
            | _ | { "empty commitment prefix" },
    }
}
