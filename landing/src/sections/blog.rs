use launchpad_core::content::BLOG_POSTS;
use leptos::prelude::*;

use super::SectionHeader;
use crate::components::{Card, Glyph, Icon};

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <section id="blog" class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeader
                    title="Latest from Our Blog"
                    description="Stay updated with the latest insights, tips, and industry trends"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {BLOG_POSTS.iter().enumerate().map(|(index, post)| {
                        let delay = format!("animation-delay: {}ms", index * 100);
                        view! {
                            <div class="fade-up" style=delay>
                                <Card
                                    image=post.image
                                    title=post.title
                                    subtitle=post.description
                                    class="h-full"
                                >
                                    <div class="flex items-center justify-between text-sm text-gray-400 mt-4">
                                        <span>{post.author}</span>
                                        <span class="flex items-center gap-1">
                                            <Icon glyph=Glyph::Calendar class="w-4 h-4" />
                                            {post.date}
                                        </span>
                                    </div>
                                </Card>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
