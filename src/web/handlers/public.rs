use actix_web::{HttpRequest, Responder, get, post, web};

use crate::web::forms::ContactForm;
use crate::web::helpers::{page_meta, render, track_page_view};
use crate::web::samples;
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, BrochuresTemplate, ContactTemplate, HomeTemplate, NotFoundTemplate, PageMeta,
    PortfolioTemplate, ProcessTemplate, ProductsTemplate, ServicesTemplate, SocialReviewsTemplate,
    WhyChooseUsTemplate,
};

#[get("/")]
pub async fn home(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/");
    let meta = page_meta(
        &state,
        "home",
        PageMeta::new(
            "Nowest Interiors — Luxury Blinds & Curtains",
            "Luxury blinds and curtains handcrafted in the UK since 2002.",
        ),
    )
    .await;

    // Featured strips on the home page share the content pages' fallback
    // policy: sample data plus a banner, never an error page.
    let (featured, projects, degraded) =
        match tokio::join!(state.api.products(), state.api.portfolio()) {
            (Ok(featured), Ok(projects)) => (featured, projects, false),
            (featured, projects) => {
                log::warn!("home page content unavailable, serving sample data");
                (
                    featured.unwrap_or_else(|_| samples::products()),
                    projects.unwrap_or_else(|_| samples::portfolio()),
                    true,
                )
            }
        };

    render(HomeTemplate {
        meta,
        products: featured.into_iter().take(3).collect(),
        portfolio: projects.into_iter().take(4).collect(),
        degraded,
    })
}

#[get("/about")]
pub async fn about(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/about");
    let meta = page_meta(
        &state,
        "about",
        PageMeta::new(
            "About Us — Nowest Interiors",
            "A family-run interior furnishings workshop, crafting window treatments since 2002.",
        ),
    )
    .await;
    render(AboutTemplate { meta })
}

#[get("/our-services")]
pub async fn services(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/our-services");
    let meta = page_meta(
        &state,
        "services",
        PageMeta::new(
            "Our Services — Nowest Interiors",
            "Design consultation, measuring, making and fitting for homes and commercial spaces.",
        ),
    )
    .await;
    render(ServicesTemplate { meta })
}

#[get("/our-process")]
pub async fn process(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/our-process");
    let meta = page_meta(
        &state,
        "process",
        PageMeta::new(
            "Our Process — Nowest Interiors",
            "From home visit to final fitting: how a Nowest commission comes together.",
        ),
    )
    .await;
    render(ProcessTemplate { meta })
}

#[get("/why-choose-us")]
pub async fn why_choose_us(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/why-choose-us");
    let meta = page_meta(
        &state,
        "why-choose-us",
        PageMeta::new(
            "Why Choose Us — Nowest Interiors",
            "Two decades of craftsmanship, UK workshops and a made-to-measure guarantee.",
        ),
    )
    .await;
    render(WhyChooseUsTemplate { meta })
}

#[get("/products")]
pub async fn products(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/products");
    let meta = page_meta(
        &state,
        "products",
        PageMeta::new(
            "Products — Nowest Interiors",
            "Blinds, curtains and commercial shading, all made to measure.",
        ),
    )
    .await;

    let (catalogue, degraded) = match state.api.products().await {
        Ok(catalogue) => (catalogue, false),
        Err(e) => {
            log::warn!("products API unavailable, serving sample data: {e}");
            (samples::products(), true)
        }
    };

    render(ProductsTemplate {
        meta,
        products: catalogue,
        degraded,
    })
}

#[get("/portfolio")]
pub async fn portfolio(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/portfolio");
    let meta = page_meta(
        &state,
        "portfolio",
        PageMeta::new(
            "Portfolio — Nowest Interiors",
            "Recent residential and commercial projects across the UK.",
        ),
    )
    .await;

    let (items, degraded) = match state.api.portfolio().await {
        Ok(items) => (items, false),
        Err(e) => {
            log::warn!("portfolio API unavailable, serving sample data: {e}");
            (samples::portfolio(), true)
        }
    };

    render(PortfolioTemplate {
        meta,
        items,
        degraded,
    })
}

#[get("/brochures")]
pub async fn brochures(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/brochures");
    let meta = page_meta(
        &state,
        "brochures",
        PageMeta::new(
            "Brochures — Nowest Interiors",
            "Download our latest fabric and product brochures.",
        ),
    )
    .await;

    let (downloads, degraded) = match state.api.brochures().await {
        Ok(downloads) => (downloads, false),
        Err(e) => {
            log::warn!("brochures API unavailable, serving sample data: {e}");
            (samples::brochures(), true)
        }
    };

    render(BrochuresTemplate {
        meta,
        brochures: downloads,
        degraded,
    })
}

#[get("/social-reviews")]
pub async fn social_reviews(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/social-reviews");
    let meta = page_meta(
        &state,
        "social-reviews",
        PageMeta::new(
            "Reviews — Nowest Interiors",
            "What our clients say about working with Nowest Interiors.",
        ),
    )
    .await;
    render(SocialReviewsTemplate { meta })
}

fn contact_meta() -> PageMeta {
    PageMeta::new(
        "Contact — Nowest Interiors",
        "Book a consultation or request a quote for your project.",
    )
}

#[get("/contact")]
pub async fn contact(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    track_page_view(&state, &req, "/contact");
    let meta = page_meta(&state, "contact", contact_meta()).await;
    render(ContactTemplate {
        meta,
        submitted: false,
        error: None,
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let meta = page_meta(&state, "contact", contact_meta()).await;
    let form = form.into_inner();

    if let Err(msg) = form.validate() {
        return render(ContactTemplate {
            meta,
            submitted: false,
            error: Some(msg.to_string()),
        });
    }

    match state.api.create_lead(&form.into_lead()).await {
        Ok(lead) => {
            log::info!("new lead captured: {}", lead.id);
            render(ContactTemplate {
                meta,
                submitted: true,
                error: None,
            })
        }
        Err(e) => {
            log::warn!("lead submission failed: {e}");
            render(ContactTemplate {
                meta,
                submitted: false,
                error: Some(
                    "We couldn't send your message just now. Please try again, or call us directly."
                        .to_string(),
                ),
            })
        }
    }
}

/// Catch-all 404 page; registered as the default service.
pub async fn not_found() -> impl Responder {
    let body = render(NotFoundTemplate {
        meta: PageMeta::new("Page Not Found — Nowest Interiors", "Page not found."),
    });
    body.customize().with_status(actix_web::http::StatusCode::NOT_FOUND)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(about)
        .service(services)
        .service(process)
        .service(why_choose_us)
        .service(products)
        .service(portfolio)
        .service(brochures)
        .service(social_reviews)
        .service(contact)
        .service(contact_submit);
}
