//! Notice rendering: toasts and banners
//!
//! Components push [`Notice`] descriptors (usually via [`report_error`]) and
//! [`NoticeHost`] renders them. Toasts and banners both stay until dismissed;
//! nothing here re-raises or retries the underlying failure.

use std::rc::Rc;
use wicket_api::{ApiError, Notice, NoticeDisplay, NoticeLevel};
use yew::prelude::*;

/// Queue of live notices.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct NoticeQueue {
    items: Vec<(usize, Notice)>,
    next_id: usize,
}

/// Queue transitions.
pub enum NoticeQueueAction {
    Push(Vec<Notice>),
    Dismiss(usize),
}

impl Reducible for NoticeQueue {
    type Action = NoticeQueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NoticeQueueAction::Push(notices) => {
                let mut items = self.items.clone();
                let mut next_id = self.next_id;
                for notice in notices {
                    items.push((next_id, notice));
                    next_id += 1;
                }
                Rc::new(Self { items, next_id })
            }
            NoticeQueueAction::Dismiss(id) => Rc::new(Self {
                items: self
                    .items
                    .iter()
                    .filter(|(item_id, _)| *item_id != id)
                    .cloned()
                    .collect(),
                next_id: self.next_id,
            }),
        }
    }
}

/// Notice context handle
pub type NoticeContext = UseReducerHandle<NoticeQueue>;

/// Push the notices for a failed call onto the queue.
pub fn report_error(notices: &NoticeContext, error: &ApiError) {
    notices.dispatch(NoticeQueueAction::Push(Notice::for_error(error)));
}

/// Notice provider props
#[derive(Properties, PartialEq)]
pub struct NoticeProviderProps {
    pub children: Children,
}

/// Notice provider component; hosts the overlay alongside its children.
#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let queue = use_reducer(NoticeQueue::default);

    html! {
        <ContextProvider<NoticeContext> context={queue}>
            <NoticeHost />
            {props.children.clone()}
        </ContextProvider<NoticeContext>>
    }
}

/// Hook to use the notice context
#[hook]
pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>()
        .expect("NoticeContext not found. Make sure to wrap your component with NoticeProvider")
}

fn level_classes(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Warning => "border-amber-400 bg-amber-50 text-amber-800",
        NoticeLevel::Error => "border-red-400 bg-red-50 text-red-800",
    }
}

/// Overlay rendering the queued notices.
#[function_component(NoticeHost)]
pub fn notice_host() -> Html {
    let notices = use_notices();

    let banners: Html = notices
        .items
        .iter()
        .filter(|(_, n)| n.display == NoticeDisplay::Banner)
        .map(|(id, notice)| render_banner(&notices, *id, notice))
        .collect();

    let toasts: Html = notices
        .items
        .iter()
        .filter(|(_, n)| n.display == NoticeDisplay::Toast)
        .map(|(id, notice)| render_toast(&notices, *id, notice))
        .collect();

    html! {
        <>
            <div class="fixed top-0 inset-x-0 z-50 flex flex-col gap-2 p-2">
                {banners}
            </div>
            <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 items-end">
                {toasts}
            </div>
        </>
    }
}

fn dismiss(notices: &NoticeContext, id: usize) -> Callback<MouseEvent> {
    let notices = notices.clone();
    Callback::from(move |_| notices.dispatch(NoticeQueueAction::Dismiss(id)))
}

fn render_banner(notices: &NoticeContext, id: usize, notice: &Notice) -> Html {
    html! {
        <div key={id} class={classes!("border", "rounded", "shadow", "px-4", "py-3", "flex", "justify-between", "items-start", level_classes(notice.level))}>
            <div>
                if let Some(title) = &notice.title {
                    <p class="font-semibold">{title}</p>
                }
                <p>{&notice.body}</p>
            </div>
            <button onclick={dismiss(notices, id)} class="ml-4 font-bold" aria-label="Dismiss">
                {"×"}
            </button>
        </div>
    }
}

fn render_toast(notices: &NoticeContext, id: usize, notice: &Notice) -> Html {
    html! {
        <div key={id} class={classes!("border", "rounded", "shadow", "px-4", "py-2", "flex", "items-center", level_classes(notice.level))}>
            <span>{&notice.body}</span>
            <button onclick={dismiss(notices, id)} class="ml-3 font-bold" aria-label="Dismiss">
                {"×"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let queue = Rc::new(NoticeQueue::default());
        let queue = queue.reduce(NoticeQueueAction::Push(vec![
            Notice::error_toast("one"),
            Notice::error_toast("two"),
        ]));
        assert_eq!(queue.items.len(), 2);
        assert_eq!(queue.items[0].0, 0);
        assert_eq!(queue.items[1].0, 1);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let queue = Rc::new(NoticeQueue::default());
        let queue = queue.reduce(NoticeQueueAction::Push(vec![
            Notice::error_toast("one"),
            Notice::warning_toast("two"),
        ]));
        let queue = queue.reduce(NoticeQueueAction::Dismiss(0));
        assert_eq!(queue.items.len(), 1);
        assert_eq!(queue.items[0].1.body, "two");
    }
}
