use scraper::{ElementRef, Html, Selector};

/// Parse markup into a DOM. Broken markup is repaired, never rejected.
pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// Direct `<li>` children of a list, in order.
pub fn list_items<'a>(list: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "li")
}

pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Value of the first control under `scope` matching `selector`.
pub fn field_value(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().and_then(control_value)
}

/// Form-control value: `value` attribute, textarea text, or the selected option.
pub fn control_value(el: ElementRef<'_>) -> Option<String> {
    match el.value().name() {
        "textarea" => Some(element_text(el)),
        "select" => selected_option(el),
        _ => el.value().attr("value").map(str::to_string),
    }
}

fn selected_option(select: ElementRef<'_>) -> Option<String> {
    let options: Vec<ElementRef<'_>> = select
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "option")
        .collect();
    let chosen = options
        .iter()
        .find(|o| o.value().attr("selected").is_some())
        .or_else(|| options.first())?;
    Some(
        chosen
            .value()
            .attr("value")
            .map(str::to_string)
            .unwrap_or_else(|| element_text(*chosen).trim().to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn list_items_skips_nested_lists() {
        let doc = parse_document(
            "<ul id='outer'><li>a</li><li>b<ul><li>inner</li></ul></li><li>c</li></ul>",
        );
        let items: Vec<String> = list_items(first(&doc, "#outer")).map(element_text).collect();
        assert_eq!(items, vec!["a", "binner", "c"]);
    }

    #[test]
    fn control_values() {
        let doc = parse_document(
            r#"<div>
                <input name="a" value="Plan A">
                <input name="b">
                <textarea name="c">Plan C</textarea>
                <select name="d"><option value="1">one</option><option value="2" selected>two</option></select>
                <select name="e"><option>first</option><option>second</option></select>
            </div>"#,
        );
        let scope = first(&doc, "div");
        let value = |n: &str| field_value(scope, &Selector::parse(&format!("[name={n}]")).unwrap());
        assert_eq!(value("a").as_deref(), Some("Plan A"));
        assert_eq!(value("b"), None);
        assert_eq!(value("c").as_deref(), Some("Plan C"));
        assert_eq!(value("d").as_deref(), Some("2"));
        assert_eq!(value("e").as_deref(), Some("first"));
        assert_eq!(value("z"), None);
    }

    #[test]
    fn malformed_markup_is_repaired() {
        let doc = parse_document("<div class='x'><ul><li>one<li>two</ul");
        let items: Vec<String> = list_items(first(&doc, "ul")).map(element_text).collect();
        assert_eq!(items, vec!["one", "two"]);
    }
}
