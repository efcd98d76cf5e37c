#![allow(dead_code)]

use std::cell::RefCell;

use portfolio_frontend::bindings::FormField;
use portfolio_frontend::{initialize, Dialogs, Page, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement};

pub const PAGE: &str = r#"
<header>
    <h1>Hello <span id="username">guest</span></h1>
    <nav>
        <button type="button" class="nav-button">Home</button>
        <button type="button" class="nav-button">Our Profile</button>
        <button type="button" class="nav-button">Portofolio</button>
        <button type="button" class="nav-button">Message Us</button>
        <button type="button" class="nav-button">Careers</button>
    </nav>
</header>
<section class="welcome">
    <div class="bg-gray-100"><p>placeholder</p></div>
</section>
<section class="headquarter-section">
    <div class="circle-placeholder"></div>
    <div class="circle-placeholder"></div>
</section>
<section class="contact-section">
    <form class="contact-form">
        <div><label>Name</label><input type="text" required></div>
        <div><label>Email</label><input type="email" required></div>
        <div>
            <label>Subject</label>
            <select>
                <option value="general">General</option>
                <option value="work">Work with us</option>
            </select>
        </div>
        <div><label>Message</label><textarea required></textarea></div>
        <button type="button" class="submit-button">Submit</button>
    </form>
</section>
"#;

/// Dialogs that answer the name prompt from a script and record alerts.
pub struct FakeDialogs {
    pub answer: Option<String>,
    pub prompts: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
}

impl FakeDialogs {
    pub fn answering(answer: Option<&str>) -> Self {
        Self {
            answer: answer.map(str::to_string),
            prompts: RefCell::new(Vec::new()),
            alerts: RefCell::new(Vec::new()),
        }
    }
}

impl Dialogs for FakeDialogs {
    fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer.clone()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// A detached copy of the page markup appended to `<body>`.
pub struct Fixture {
    pub root: Element,
}

impl Fixture {
    pub fn mount(markup: &str) -> Self {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(markup);
        document.body().unwrap().append_child(&root).unwrap();
        Self { root }
    }

    pub fn page() -> Self {
        Self::mount(PAGE)
    }

    pub fn init(&self, config: PageConfig) -> Page {
        initialize(&self.root, config, &FakeDialogs::answering(Some("Ada"))).unwrap()
    }

    pub fn query(&self, selector: &str) -> Element {
        self.root.query_selector(selector).unwrap().unwrap()
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let nodes = self.root.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|node| node.dyn_into::<Element>().unwrap())
            .collect()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

pub fn fast_config(tag: &str) -> PageConfig {
    PageConfig {
        submit_delay_ms: 30,
        success_dismiss_ms: 80,
        typing_interval_ms: 5,
        success_message: format!("Thanks from test {}", tag),
        ..PageConfig::default()
    }
}

pub fn set_value(field: &FormField, value: &str) {
    if let Some(input) = field.element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = field.element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        panic!("{:?} is not a text control", field.kind);
    }
}

pub fn fire(target: &Element, event: &str) {
    let event = Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Error messages rendered next to `field`.
pub fn errors_for(field: &FormField) -> Vec<String> {
    let parent = field.element.parent_element().unwrap();
    let nodes = parent.query_selector_all(".error-message").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

/// Success notifications in `<body>` carrying `message`.
pub fn toasts_with(message: &str) -> usize {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let nodes = body.query_selector_all(".bg-green-500").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter(|node| node.text_content().as_deref() == Some(message))
        .count()
}
