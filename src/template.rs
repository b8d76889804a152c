// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::pair::PairNames;

/// Used in place of an unset first name.
pub const FALLBACK_A: &str = "партнер";
/// Used in place of an unset second name.
pub const FALLBACK_B: &str = "партнерка";

/// Substitute the players' names into a card's text.
///
/// `{boy}` and `{girl}` insert the names as entered; `{Boy}` and `{Girl}`
/// insert them with the first letter capitalized, for the start of a
/// sentence. The output is not escaped.
pub fn render(template: Option<&str>, pair: &PairNames) -> String {
    let template = match template {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };
    let a = name_or(&pair.partner_a, FALLBACK_A);
    let b = name_or(&pair.partner_b, FALLBACK_B);
    let tokens: [(&str, String); 4] = [
        ("{boy}", a.to_string()),
        ("{Boy}", capitalize(a)),
        ("{girl}", b.to_string()),
        ("{Girl}", capitalize(b)),
    ];
    // Single pass, so that a name containing a token is left as is.
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        rest = &rest[open..];
        match tokens.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                output.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                output.push('{');
                rest = &rest[1..];
            }
        }
    }
    output.push_str(rest);
    output
}

fn name_or<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.is_empty() { fallback } else { name }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
