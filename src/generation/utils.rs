//! String and collection utilities shared by the helpers

use std::collections::HashSet;
use std::hash::Hash;

/// Drops repeated items, keeping each at its first position.
///
/// # Examples
/// ```
/// use tsgen_helpers::generation::utils::unique;
///
/// assert_eq!(unique(["string", "number", "string"]), vec!["string", "number"]);
/// ```
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Splits an identifier into lowercase words on case changes and on
/// `-`, `_`, `.` and whitespace; other punctuation is dropped.
///
/// A run of capitals is one word, except that its last capital starts the
/// next word when a lowercase letter follows (`HTTPResponse` is `http`,
/// `response`).
fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_is_lowercase = false;
    let mut prev_is_uppercase = false;

    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev_is_lowercase || (prev_is_uppercase && next_is_lowercase);
            if boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(ch.to_lowercase());
            prev_is_lowercase = false;
            prev_is_uppercase = true;
        } else if ch.is_alphanumeric() {
            current.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_numeric();
            prev_is_uppercase = false;
        } else {
            let separator = matches!(ch, '-' | '_' | '.') || ch.is_whitespace();
            if separator && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_lowercase = false;
            prev_is_uppercase = false;
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Converts a string to lowerCamelCase for TypeScript identifiers.
///
/// # Examples
/// ```
/// use tsgen_helpers::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("find_pets_by_status"), "findPetsByStatus");
/// assert_eq!(to_camel_case("find-pets-by-status"), "findPetsByStatus");
/// assert_eq!(to_camel_case("Find Pets"), "findPets");
/// ```
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                return word;
            }
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect()
}

pub fn to_lower_case(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_preserves_first_occurrence() {
        assert_eq!(unique(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(
            unique(vec!["B".to_string(), "A".to_string(), "B".to_string()]),
            vec!["B".to_string(), "A".to_string()]
        );
        assert!(unique(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("find_pets_by_status"), "findPetsByStatus");
        assert_eq!(to_camel_case("FindPetsByStatus"), "findPetsByStatus");
        assert_eq!(to_camel_case("find-pets-by-status"), "findPetsByStatus");
        assert_eq!(to_camel_case("FIND_PETS_BY_STATUS"), "findPetsByStatus");
        assert_eq!(to_camel_case("get HTTP response"), "getHttpResponse");
        assert_eq!(to_camel_case("HTTPResponse"), "httpResponse");
        assert_eq!(to_camel_case("getHTTPStatus"), "getHttpStatus");
        assert_eq!(to_camel_case("listPetsV2"), "listPetsV2");
        assert_eq!(to_camel_case("ID"), "id");
        assert_eq!(to_camel_case("api.v2.users"), "apiV2Users");
        assert_eq!(to_camel_case("__private"), "private");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_lower_case() {
        assert_eq!(to_lower_case("PetStore"), "petstore");
        assert_eq!(to_lower_case("ÄPFEL"), "äpfel");
    }
}
