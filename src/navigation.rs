//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "block py-2 px-3 text-white bg-blue-700 rounded-sm lg:bg-transparent
        lg:text-blue-700 lg:p-0 dark:text-white lg:dark:text-blue-500"
        } else {
            "block py-2 px-3 text-gray-900 rounded-sm hover:bg-gray-100
        lg:hover:bg-transparent lg:border-0 lg:hover:text-blue-700 lg:p-0
        dark:text-white lg:dark:hover:text-blue-500 dark:hover:bg-gray-700
        dark:hover:text-white lg:dark:hover:bg-transparent"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = [
            (endpoints::EXPENSES_VIEW, "View Expenses"),
            (endpoints::NEW_EXPENSE_VIEW, "Add Expense"),
            (endpoints::DELETE_EXPENSE_VIEW, "Delete Expense"),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
        html!(
            nav class="bg-white border-gray-200 dark:bg-gray-900"
            {
                div
                    class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
                {
                    a
                        href=(endpoints::ROOT)
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                    {
                        span
                            class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                        {
                            "Expense Tracker"
                        }
                    }

                    ul
                        class="font-medium flex flex-row p-0 space-x-8
                        rtl:space-x-reverse dark:bg-gray-900"
                    {
                        @for link in self.links {
                            li { (link.into_html()) }
                        }
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::endpoints;

    use super::NavBar;

    #[test]
    fn marks_only_the_active_link_as_current() {
        let html = NavBar::new(endpoints::NEW_EXPENSE_VIEW)
            .into_html()
            .into_string();
        let fragment = Html::parse_fragment(&html);
        let selector = Selector::parse("a[aria-current=page]").unwrap();

        let current_links = fragment.select(&selector).collect::<Vec<_>>();

        assert_eq!(current_links.len(), 1, "want 1 current link");
        assert_eq!(
            current_links[0].value().attr("href"),
            Some(endpoints::NEW_EXPENSE_VIEW)
        );
    }

    #[test]
    fn links_to_every_action() {
        let html = NavBar::new(endpoints::EXPENSES_VIEW)
            .into_html()
            .into_string();
        let fragment = Html::parse_fragment(&html);

        for endpoint in [
            endpoints::EXPENSES_VIEW,
            endpoints::NEW_EXPENSE_VIEW,
            endpoints::DELETE_EXPENSE_VIEW,
        ] {
            let selector = Selector::parse(&format!("li a[href=\"{endpoint}\"]")).unwrap();
            assert!(
                fragment.select(&selector).next().is_some(),
                "want a link to {endpoint}"
            );
        }
    }
}
