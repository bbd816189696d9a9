///////////////////////////////////////////////////////////////////////
// Locations
///////////////////////////////////////////////////////////////////////

table! {
    locations (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        street -> Text,
        city -> Text,
        state -> Text,
        zip -> Text,
        lat -> Nullable<Double>,
        lng -> Nullable<Double>,
    }
}
