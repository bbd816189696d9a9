use crate::entities::Address;
use itertools::Itertools;
use url::form_urlencoded::byte_serialize;

const QUERY_WORD_SEPARATOR: &str = "+";

/// Builds the query string for a forward geocoding request.
///
/// Street, city and state are split into words and every
/// word is form-url-encoded. The words are joined by `+`,
/// i.e. the encoded space character. The zip code is not
/// part of the query.
pub fn address_to_forward_query_string(addr: &Address) -> String {
    let addr_parts = [&addr.street, &addr.city, &addr.state];
    addr_parts
        .into_iter()
        .flat_map(|part| part.split_whitespace())
        .map(|word| byte_serialize(word.as_bytes()).collect::<String>())
        .join(QUERY_WORD_SEPARATOR)
}
