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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;

use crate::i18n::strings;
use crate::types::lang::Lang;

/// Wrap a screen in the page shell. With `refresh`, the browser reloads the
/// page every second, which is how the play screen polls a load in flight.
pub fn page_template(lang: Lang, body: Markup, refresh: bool) -> Markup {
    let s = strings(lang);
    html! {
        (DOCTYPE)
        html lang=(lang.html_code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if refresh {
                    meta http-equiv="refresh" content="1";
                }
                title { (s.app_name) }
                link rel="stylesheet" href="/style.css";
            }
            body {
                header {
                    a.brand href="/" { (s.app_name) }
                    nav {
                        a href="/play" { (s.play) }
                        a href="/settings" { (s.settings) }
                    }
                }
                main {
                    (body)
                }
            }
        }
    }
}
