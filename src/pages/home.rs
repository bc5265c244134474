//! The portfolio landing page.

use leptos::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::project_gallery::ProjectGallery;
use crate::components::scroll_chrome::ScrollChrome;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ScrollChrome/>
        <SiteHeader/>
        <main class="home-page">
            <section id="about" class="home-page__section">
                <h2>"About"</h2>
                <p>
                    "Developer working across web front-ends, Java services and Python tooling. "
                    "Browse the projects below or get in touch through the contact form."
                </p>
            </section>
            <ProjectGallery/>
            <ContactSection/>
        </main>
        <SiteFooter/>
    }
}
