//! Test doubles for the document and the event loop timers
//!
//! [`MockDom`] is an arena-backed element tree understanding the compound selectors the
//! default configuration uses (`tag`, `#id`, `.class`, `[attr]`, `[attr="v"]`, `[attr^="v"]`).
//! [`ManualScheduler`] runs tasks only when its virtual clock is advanced.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::core::dom::Dom;
use crate::core::error::HostError;
use crate::core::scheduler::{Scheduler, TaskHandle};

pub type NodeId = usize;

#[derive(Debug, Default, Clone)]
struct MockNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    text: String,
    value: String,
    disabled: bool,
    styles: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// In-memory document
pub struct MockDom {
    nodes: RefCell<Vec<MockNode>>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    scroll_y: Cell<f64>,
    scrolled_to: RefCell<Vec<NodeId>>,
    clicks: RefCell<Vec<NodeId>>,
    toggles: RefCell<Vec<(NodeId, NodeId, String)>>,
    fail_create: Cell<bool>,
}

impl MockDom {
    /// Empty document with `<html>`, `<head>` and `<body>`
    pub fn new() -> Self {
        let dom = Self {
            nodes: RefCell::new(Vec::new()),
            root: 0,
            head: 1,
            body: 2,
            scroll_y: Cell::new(0.0),
            scrolled_to: RefCell::new(Vec::new()),
            clicks: RefCell::new(Vec::new()),
            toggles: RefCell::new(Vec::new()),
            fail_create: Cell::new(false),
        };
        dom.push_node("html");
        dom.append(dom.root, "head");
        dom.append(dom.root, "body");
        dom
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    fn push_node(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MockNode {
            tag: tag.to_ascii_lowercase(),
            ..MockNode::default()
        });
        nodes.len() - 1
    }

    /// Append a new child element to `parent`
    pub fn append(&self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.push_node(tag);
        self.attach(parent, id, None);
        id
    }

    /// Append a new child element with attributes; `class` is split into classes
    pub fn element(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let id = self.append(parent, tag);
        for (name, value) in attributes {
            self.set_attribute(id, name, value);
        }
        id
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if name == "class" {
            nodes[node].classes = value.split_whitespace().map(str::to_string).collect();
        } else {
            nodes[node]
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        if !nodes[node].classes.iter().any(|c| c == class) {
            nodes[node].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&self, node: NodeId, class: &str) {
        self.nodes.borrow_mut()[node].classes.retain(|c| c != class);
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node].styles.get(property).cloned()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node].children.clone()
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.scroll_y.set(offset);
    }

    /// Elements `scroll_into_view` was requested for, in order
    pub fn scrolled_to(&self) -> Vec<NodeId> {
        self.scrolled_to.borrow().clone()
    }

    /// Elements that received a synthetic click, in order
    pub fn clicks(&self) -> Vec<NodeId> {
        self.clicks.borrow().clone()
    }

    /// Make clicks on `toggle` flip `class` on `overlay`, like a collapse plugin would
    pub fn link_toggle(&self, toggle: NodeId, overlay: NodeId, class: &str) {
        self.toggles
            .borrow_mut()
            .push((toggle, overlay, class.to_string()));
    }

    /// Make every following `create_element` call fail
    pub fn fail_element_creation(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    /// Number of attached elements matching `selector`
    pub fn count(&self, selector: &str) -> usize {
        self.query_selector_all(selector).len()
    }

    fn attach(&self, parent: NodeId, node: NodeId, index: Option<usize>) {
        self.detach(node);
        let mut nodes = self.nodes.borrow_mut();
        let children = &mut nodes[parent].children;
        match index {
            Some(index) if index <= children.len() => children.insert(index, node),
            _ => children.push(node),
        }
        nodes[node].parent = Some(parent);
    }

    fn detach(&self, node: NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = nodes[node].parent.take() {
            nodes[parent].children.retain(|&child| child != node);
        }
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id].children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, node: NodeId, selector: &Compound) -> bool {
        let nodes = self.nodes.borrow();
        let node = &nodes[node];
        if let Some(tag) = &selector.tag {
            if !node.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &selector.id {
            if node.attributes.get("id") != Some(id) {
                return false;
            }
        }
        if !selector
            .classes
            .iter()
            .all(|class| node.classes.contains(class))
        {
            return false;
        }
        selector.attributes.iter().all(|(name, op)| {
            let Some(actual) = node.attributes.get(name) else {
                return false;
            };
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals(expected) => actual == expected,
                AttrOp::Prefix(prefix) => actual.starts_with(prefix.as_str()),
            }
        })
    }
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for MockDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root).into_iter().find(|&node| {
            self.nodes.borrow()[node].attributes.get("id").map(String::as_str) == Some(id)
        })
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let compound = Compound::parse(selector);
        self.descendants(self.root)
            .into_iter()
            .filter(|&node| self.matches(node, &compound))
            .collect()
    }

    fn query_within(&self, root: &NodeId, selector: &str) -> Option<NodeId> {
        let compound = Compound::parse(selector);
        self.descendants(*root)
            .into_iter()
            .find(|&node| self.matches(node, &compound))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        let nodes = self.nodes.borrow();
        if name == "class" {
            return Some(nodes[*node].classes.join(" "));
        }
        nodes[*node].attributes.get(name).cloned()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[*node].classes.iter().any(|c| c == class)
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = nodes[id].parent;
        }
        false
    }

    fn is_connected(&self, node: &NodeId) -> bool {
        self.contains(&self.root, node)
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].value.clone()
    }

    fn set_value(&self, node: &NodeId, value: &str) {
        self.nodes.borrow_mut()[*node].value = value.to_string();
    }

    fn text(&self, node: &NodeId) -> String {
        self.nodes.borrow()[*node].text.clone()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[*node].text = text.to_string();
    }

    fn is_disabled(&self, node: &NodeId) -> bool {
        self.nodes.borrow()[*node].disabled
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.nodes.borrow_mut()[*node].disabled = disabled;
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[*node]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn create_element(&self, tag: &str, class_name: &str) -> Result<NodeId, HostError> {
        if self.fail_create.get() {
            return Err(HostError::CreateElement {
                tag: tag.to_string(),
                reason: "creation disabled by test".to_string(),
            });
        }
        let id = self.push_node(tag);
        self.set_attribute(id, "class", class_name);
        Ok(id)
    }

    fn insert_after(&self, reference: &NodeId, node: &NodeId) {
        let Some(parent) = self.nodes.borrow()[*reference].parent else {
            return;
        };
        self.detach(*node);
        let index = self.nodes.borrow()[parent]
            .children
            .iter()
            .position(|child| child == reference)
            .map(|index| index + 1);
        self.attach(parent, *node, index);
    }

    fn remove(&self, node: &NodeId) {
        self.detach(*node);
    }

    fn click(&self, node: &NodeId) {
        self.clicks.borrow_mut().push(*node);
        let linked: Vec<(NodeId, String)> = self
            .toggles
            .borrow()
            .iter()
            .filter(|(toggle, _, _)| toggle == node)
            .map(|(_, overlay, class)| (*overlay, class.clone()))
            .collect();
        for (overlay, class) in linked {
            if self.has_class(&overlay, &class) {
                self.remove_class(overlay, &class);
            } else {
                self.add_class(overlay, &class);
            }
        }
    }

    fn scroll_into_view(&self, node: &NodeId) {
        self.scrolled_to.borrow_mut().push(*node);
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn inject_stylesheet(&self, css: &str) -> Result<(), HostError> {
        let style = self.append(self.head, "style");
        self.set_text(&style, css);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

/// A single compound selector such as `a.nav-link[href^="#"]`
#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, AttrOp)>,
}

impl Compound {
    fn parse(selector: &str) -> Self {
        let mut compound = Compound::default();
        let mut chars = selector.trim().chars().peekable();

        fn ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
            let mut out = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    out.push(c);
                    chars.next();
                } else {
                    break;
                }
            }
            out
        }

        while let Some(&c) = chars.peek() {
            match c {
                '#' => {
                    chars.next();
                    compound.id = Some(ident(&mut chars));
                }
                '.' => {
                    chars.next();
                    compound.classes.push(ident(&mut chars));
                }
                '[' => {
                    chars.next();
                    let body: String = chars.by_ref().take_while(|&c| c != ']').collect();
                    compound.attributes.push(parse_attribute(&body));
                }
                c if c.is_ascii_alphabetic() || c == '*' => {
                    if c == '*' {
                        chars.next();
                    } else {
                        compound.tag = Some(ident(&mut chars));
                    }
                }
                _ => {
                    chars.next();
                }
            }
        }
        compound
    }
}

fn parse_attribute(body: &str) -> (String, AttrOp) {
    let unquote = |value: &str| {
        value
            .trim()
            .trim_matches(|c: char| c == '"' || c == '\'')
            .to_string()
    };
    if let Some((name, value)) = body.split_once("^=") {
        (name.trim().to_string(), AttrOp::Prefix(unquote(value)))
    } else if let Some((name, value)) = body.split_once('=') {
        (name.trim().to_string(), AttrOp::Equals(unquote(value)))
    } else {
        (body.trim().to_string(), AttrOp::Exists)
    }
}

struct Scheduled {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    queue: Vec<Scheduled>,
    fail: bool,
}

/// Virtual-clock scheduler; cloning shares the same queue
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().queue.len()
    }

    /// Make every following `schedule` call fail
    pub fn fail_scheduling(&self, fail: bool) {
        self.state.borrow_mut().fail = fail;
    }

    /// Move the clock forward, running due tasks in due order (ties in scheduling order).
    /// Tasks scheduled by running tasks also run if they fall due within the window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let earliest = state
                    .queue
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                earliest.map(|index| {
                    let task = state.queue.remove(index);
                    state.now = task.due;
                    task.task
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = target;
    }
}

pub struct ManualHandle {
    id: u64,
    state: Weak<RefCell<ManualState>>,
}

impl TaskHandle for ManualHandle {
    fn cancel(&self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().queue.retain(|task| task.id != self.id);
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<ManualHandle, HostError> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(HostError::Schedule("scheduling disabled by test".to_string()));
        }
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.queue.push(Scheduled { id, due, task });
        Ok(ManualHandle {
            id,
            state: Rc::downgrade(&self.state),
        })
    }
}

/// Stock "coming soon" markup used across binder tests
pub struct Fixture {
    pub dom: Rc<MockDom>,
    pub navbar: NodeId,
    pub toggle: NodeId,
    pub overlay: NodeId,
    pub nav_link: NodeId,
    pub form: NodeId,
    pub email: NodeId,
    pub submit: NodeId,
    pub sections: Vec<NodeId>,
}

impl Fixture {
    pub fn new() -> Self {
        let dom = Rc::new(MockDom::new());
        let body = dom.body();

        let navbar = dom.element(body, "nav", &[("class", "navbar navbar-expand-lg")]);
        let toggle = dom.element(navbar, "button", &[("class", "navbar-toggler")]);
        let overlay = dom.element(navbar, "div", &[("class", "navbar-collapse collapse")]);
        dom.link_toggle(toggle, overlay, "show");
        let nav_link = dom.element(overlay, "a", &[("class", "nav-link"), ("href", "#pricing")]);
        dom.element(overlay, "a", &[("class", "nav-link"), ("href", "#")]);

        let hero = dom.element(body, "section", &[("id", "hero")]);
        let form = dom.element(hero, "form", &[("id", "newsletterForm")]);
        let email = dom.element(form, "input", &[("type", "email")]);
        let submit = dom.element(form, "button", &[("type", "submit")]);
        dom.set_text(&submit, "Notify Me");
        dom.element(hero, "p", &[("class", "form-note")]);

        let pricing = dom.element(body, "section", &[("id", "pricing")]);
        dom.element(pricing, "a", &[("href", "#hero")]);

        Self {
            dom,
            navbar,
            toggle,
            overlay,
            nav_link,
            form,
            email,
            submit,
            sections: vec![hero, pricing],
        }
    }

    pub fn open_menu(&self) {
        self.dom.add_class(self.overlay, "show");
    }

    pub fn menu_open(&self) -> bool {
        self.dom.has_class(&self.overlay, "show")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        let compound = Compound::parse(r##"a.nav-link[href^="#"]"##);
        assert_eq!(compound.tag.as_deref(), Some("a"));
        assert_eq!(compound.classes, vec!["nav-link".to_string()]);
        assert_eq!(
            compound.attributes,
            vec![("href".to_string(), AttrOp::Prefix("#".to_string()))]
        );
    }

    #[test]
    fn test_query_document_order() {
        let fixture = Fixture::new();
        let dom = &fixture.dom;
        assert_eq!(dom.query_selector_all("section"), fixture.sections);
        assert_eq!(dom.query_selector(".navbar"), Some(fixture.navbar));
        assert_eq!(dom.element_by_id("newsletterForm"), Some(fixture.form));
        assert_eq!(dom.count(r##"a[href^="#"]"##), 3);
    }

    #[test]
    fn test_insert_after_and_remove() {
        let fixture = Fixture::new();
        let dom = &fixture.dom;
        let note = dom.create_element("div", "note").unwrap();
        assert!(!dom.is_connected(&note));

        dom.insert_after(&fixture.form, &note);
        let hero = fixture.sections[0];
        assert_eq!(dom.children(hero)[1], note);
        assert!(dom.is_connected(&note));

        dom.remove(&note);
        assert!(!dom.is_connected(&note));
    }

    #[test]
    fn test_linked_toggle() {
        let fixture = Fixture::new();
        assert!(!fixture.menu_open());
        fixture.dom.click(&fixture.toggle);
        assert!(fixture.menu_open());
        fixture.dom.click(&fixture.toggle);
        assert!(!fixture.menu_open());
    }

    #[test]
    fn test_manual_scheduler_runs_in_due_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = log.clone();
            scheduler
                .schedule(
                    Duration::from_millis(delay),
                    Box::new(move || log.borrow_mut().push(label)),
                )
                .unwrap();
        }
        scheduler.advance(Duration::from_millis(25));
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.now(), Duration::from_millis(30));
    }
}
