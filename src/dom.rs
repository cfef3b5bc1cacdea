use scraper::{ElementRef, Html, Selector};

/// Selector-based view over a parsed HTML document.
///
/// Extraction code depends on this seam instead of a concrete parser API,
/// so any CSS-selector-capable backend can stand in for [`HtmlDocument`].
pub(crate) trait DocumentView {
    type Element<'a>: ElementView
    where
        Self: 'a;

    fn find_all<'a>(&'a self, selector: &str) -> Vec<Self::Element<'a>>;
}

pub(crate) trait ElementView: Sized {
    fn find(&self, selector: &str) -> Option<Self>;
    fn text(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
}

pub(crate) struct HtmlDocument(Html);

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self(Html::parse_document(html))
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HtmlElement<'a>(ElementRef<'a>);

impl DocumentView for HtmlDocument {
    type Element<'a> = HtmlElement<'a>;

    fn find_all<'a>(&'a self, selector: &str) -> Vec<HtmlElement<'a>> {
        let selector = Selector::parse(selector).unwrap();
        self.0.select(&selector).map(HtmlElement).collect()
    }
}

impl ElementView for HtmlElement<'_> {
    fn find(&self, selector: &str) -> Option<Self> {
        let selector = Selector::parse(selector).unwrap();
        self.0.select(&selector).next().map(HtmlElement)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }
}
