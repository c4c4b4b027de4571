//! Note creation form

use dioxus::prelude::*;

use notehub_core::gateway::create_from_draft;
use notehub_core::models::{DraftErrors, NoteDraft, NoteTag, CONTENT_MAX_LEN, TITLE_MAX_LEN};
use notehub_core::Error;

use super::button::{Button, ButtonVariant};
use crate::state::AppState;

/// Signals owned by a mounted form
#[derive(Clone, Copy)]
struct FormSignals {
    draft: Signal<NoteDraft>,
    errors: Signal<DraftErrors>,
    is_saving: Signal<bool>,
}

/// Send the current draft to the gateway. Ignored while a save is running.
///
/// The draft is never modified, so after a failure the user can retry with
/// the text they entered.
fn submit(state: AppState, mut form: FormSignals, on_close: EventHandler<()>) {
    if *form.is_saving.peek() {
        return;
    }
    let Some(gateway) = state.gateway.peek().clone() else {
        state.notify_error("Notes service is not configured");
        return;
    };
    let draft = form.draft.peek().clone();

    form.is_saving.set(true);
    spawn(async move {
        let result = create_from_draft(gateway.as_ref(), &draft).await;
        form.is_saving.set(false);
        match result {
            Ok(_) => {
                form.errors.set(DraftErrors::default());
                state.invalidate_notes();
                state.notify_success("Note created");
                on_close.call(());
            }
            Err(Error::InvalidNote(field_errors)) => form.errors.set(field_errors),
            Err(e) => {
                tracing::error!("Failed to create note: {}", e);
                state.notify_error(format!("Failed to create note: {e}"));
            }
        }
    });
}

/// Title, content and tag inputs that create a note through the gateway.
///
/// On success the notes query is invalidated and `on_close` is called. On
/// failure the form stays open with the entered text intact.
#[component]
pub fn NoteForm(on_close: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut draft = use_signal(NoteDraft::default);
    let errors = use_signal(DraftErrors::default);
    let is_saving = use_signal(|| false);
    let form = FormSignals {
        draft,
        errors,
        is_saving,
    };

    let current = draft();
    let field_errors = errors();
    let label_style = format!(
        "display: flex; flex-direction: column; gap: 6px; font-size: 13px; color: {};",
        colors.text_secondary
    );
    let input_style = format!(
        "padding: 8px 12px; border: 1px solid {}; border-radius: 6px; font-size: 14px; \
         font-family: inherit; background: {}; color: {};",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        div {
            class: "note-form",
            style: "display: flex; flex-direction: column; gap: 16px;",

            h2 { style: "margin: 0; font-size: 18px;", "Create note" }

            label {
                style: "{label_style}",
                "Title"
                input {
                    r#type: "text",
                    maxlength: "{TITLE_MAX_LEN}",
                    value: "{current.title}",
                    autofocus: true,
                    style: "{input_style}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }
                if let Some(message) = field_errors.title.clone() {
                    span { class: "field-error", style: "color: {colors.error};", "{message}" }
                }
            }

            label {
                style: "{label_style}",
                "Content"
                textarea {
                    rows: "8",
                    maxlength: "{CONTENT_MAX_LEN}",
                    value: "{current.content}",
                    style: "{input_style} resize: vertical;",
                    oninput: move |evt| draft.write().content = evt.value(),
                }
                if let Some(message) = field_errors.content.clone() {
                    span { class: "field-error", style: "color: {colors.error};", "{message}" }
                }
            }

            label {
                style: "{label_style}",
                "Tag"
                select {
                    value: "{current.tag}",
                    style: "{input_style}",
                    onchange: move |evt| {
                        match evt.value().parse::<NoteTag>() {
                            Ok(tag) => draft.write().tag = tag,
                            Err(e) => tracing::warn!("Ignoring tag selection: {}", e),
                        }
                    },
                    for tag in NoteTag::ALL {
                        option {
                            value: "{tag}",
                            selected: tag == current.tag,
                            "{tag}"
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",

                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: is_saving(),
                    onclick: move |_| submit(state, form, on_close),
                    if is_saving() { "Creating..." } else { "Create note" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::prelude::*;
    use notehub_core::gateway::fake::FakeGateway;
    use notehub_core::gateway::GatewayError;
    use notehub_core::models::{DraftErrors, NoteDraft, NoteTag};
    use notehub_core::toast::ToastKind;
    use pretty_assertions::assert_eq;

    use super::{submit, FormSignals};
    use crate::state::harness::Harness;

    fn meeting_draft(title: &str) -> NoteDraft {
        NoteDraft {
            title: title.to_string(),
            content: "Agenda".to_string(),
            tag: NoteTag::Meeting,
        }
    }

    /// Open the modal and submit `draft` the way the Create button does.
    /// Returns the form signals and how often `on_close` ran.
    fn open_and_submit(harness: &Harness, draft: NoteDraft) -> (FormSignals, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let form = harness.act(|state| {
            state.open_modal();
            let form = FormSignals {
                draft: Signal::new(draft),
                errors: Signal::new(DraftErrors::default()),
                is_saving: Signal::new(false),
            };
            let counter = Rc::clone(&closes);
            let on_close = EventHandler::new(move |()| {
                counter.set(counter.get() + 1);
                state.close_modal();
            });
            submit(state, form, on_close);
            form
        });
        (form, closes)
    }

    #[tokio::test(start_paused = true)]
    async fn created_note_closes_modal_and_refetches() {
        let mut harness = Harness::mount(FakeGateway::default()).await;
        let (form, closes) = open_and_submit(&harness, meeting_draft(" Weekly sync "));
        harness.run_for(Duration::from_millis(50)).await;

        assert_eq!(closes.get(), 1);
        assert_eq!(harness.gateway.created.borrow()[0].title, "Weekly sync");
        assert_eq!(
            harness.gateway.searched(),
            vec![(1, String::new()), (1, String::new())]
        );

        let state = harness.state();
        assert!(!state.browse.peek().is_modal_open());
        assert!(!*form.is_saving.peek());
        let toasts = state.toasts.peek();
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_create_keeps_modal_and_draft() {
        let gateway = FakeGateway {
            fail_create: Some(GatewayError::Status {
                status: 400,
                message: "title is too short".to_string(),
            }),
            ..FakeGateway::default()
        };
        let mut harness = Harness::mount(gateway).await;
        let (form, closes) = open_and_submit(&harness, meeting_draft("Errand"));
        harness.run_for(Duration::from_millis(50)).await;

        assert_eq!(closes.get(), 0);
        assert_eq!(*form.draft.peek(), meeting_draft("Errand"));
        assert!(!*form.is_saving.peek());
        assert_eq!(harness.gateway.searched().len(), 1);

        let state = harness.state();
        assert!(state.browse.peek().is_modal_open());
        let toasts = state.toasts.peek();
        assert_eq!(toasts.toasts().len(), 1);
        assert_eq!(toasts.toasts()[0].kind, ToastKind::Error);
        assert_eq!(
            toasts.toasts()[0].message,
            "Failed to create note: title is too short"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_draft_shows_field_errors_without_sending() {
        let mut harness = Harness::mount(FakeGateway::default()).await;
        let (form, closes) = open_and_submit(&harness, meeting_draft("ab"));
        harness.run_for(Duration::from_millis(50)).await;

        assert_eq!(closes.get(), 0);
        assert!(harness.gateway.created.borrow().is_empty());
        assert!(form.errors.peek().title.is_some());
        assert!(harness.state().browse.peek().is_modal_open());
        assert!(harness.state().toasts.peek().toasts().is_empty());
    }
}
