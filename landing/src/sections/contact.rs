use launchpad_core::contact::{ContactForm, Field, LogSink, SubmitError};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Button, ButtonSize, Card, Glyph, Icon, Input, Textarea};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let value = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_string()));
    let error = move |field: Field| Signal::derive(move || form.with(|f| f.errors().message(field)));
    let setter = move |field: Field| {
        Callback::new(move |text: String| form.update(|f| f.set(field, text)))
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| match f.submit(&LogSink) {
            Ok(_) => tracing::debug!("contact form reset after submit"),
            Err(SubmitError::Invalid(errors)) => {
                tracing::debug!(invalid = ?errors.to_messages(), "contact form blocked")
            }
            Err(err) => tracing::error!(error = %err, "contact form delivery failed"),
        });
    };

    view! {
        <section id="contact" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <SectionHeader
                    title="Get In Touch"
                    description="Have questions? We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                />
                <div class="fade-up" style="animation-delay: 200ms">
                    <Card class="max-w-2xl mx-auto">
                        <form class="space-y-6" novalidate=true on:submit=on_submit>
                            <Input
                                label=Field::Name.label()
                                placeholder="Your full name"
                                value=value(Field::Name)
                                on_change=setter(Field::Name)
                                error=error(Field::Name)
                                required=true
                            />
                            <Input
                                label=Field::Email.label()
                                input_type="email"
                                placeholder="your.email@example.com"
                                value=value(Field::Email)
                                on_change=setter(Field::Email)
                                error=error(Field::Email)
                                required=true
                            />
                            <Textarea
                                label=Field::Message.label()
                                placeholder="Tell us about your project or ask us a question..."
                                value=value(Field::Message)
                                on_change=setter(Field::Message)
                                error=error(Field::Message)
                                required=true
                                rows=5
                            />
                            <Button button_type="submit" size=ButtonSize::Lg class="w-full">
                                <Icon glyph=Glyph::Mail />
                                "Send Message"
                            </Button>
                        </form>
                    </Card>
                </div>
            </div>
        </section>
    }
}
