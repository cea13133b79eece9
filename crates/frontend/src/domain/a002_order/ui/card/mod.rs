use contracts::domain::a001_category::Category;
use contracts::domain::a002_order::Order;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_order::api;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::{format_amount, format_long_date, or_na};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_gateway;

#[derive(Clone, Debug, PartialEq)]
enum CardState {
    Loading,
    NotFound,
    Loaded(Order),
}

/// Read-only view of a single order.
///
/// Opening it marks the order as viewed on the server.
#[component]
pub fn OrderCard(id: String, on_back: Callback<()>, on_edit: Callback<String>) -> impl IntoView {
    let gw = use_gateway();
    let card = RwSignal::new(CardState::Loading);
    let categories = RwSignal::new(None::<Vec<Category>>);

    {
        let gw = gw.clone();
        let id = id.clone();
        spawn_local(async move {
            match api::fetch_by_id(&gw, &id).await {
                Ok(order) => card.set(CardState::Loaded(order)),
                Err(e) => {
                    log::error!("failed to load order {}: {}", id, e);
                    card.set(CardState::NotFound);
                    return;
                }
            }
            if let Err(e) = api::mark_viewed(&gw, &id).await {
                log::warn!("failed to mark order {} as viewed: {}", id, e);
            }
        });
    }

    spawn_local(async move {
        match category_api::fetch_all(&gw).await {
            Ok(list) => categories.set(Some(list)),
            Err(e) => {
                log::error!("failed to load categories: {}", e);
                categories.set(Some(Vec::new()));
            }
        }
    });

    let edit_id = StoredValue::new(id);

    view! {
        <PageFrame page_id="a002_order--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Order Details" icon_name="orders">
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_back.run(())>
                        {icon("arrow-left")}
                        " Back to Orders"
                    </Button>
                    <Show when=move || matches!(card.get(), CardState::Loaded(_))>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_edit.run(edit_id.get_value())
                        >
                            {icon("edit")}
                            " Edit"
                        </Button>
                    </Show>
                </Flex>
            </PageHeader>

            {move || match card.get() {
                CardState::Loading => view! {
                    <div class="page__loading"><Spinner /> " Loading order..."</div>
                }.into_any(),
                CardState::NotFound => view! {
                    <div class="page__empty">
                        <h3>"Order not found"</h3>
                        <p>"The order you're looking for doesn't exist."</p>
                    </div>
                }.into_any(),
                CardState::Loaded(order) => {
                    let resolved = order.clone();
                    let category =
                        move || categories.with(|list| resolved.category_name(list.as_deref()));
                    view! {
                        <div class="detail-card">
                            <div class="detail-card__header">
                                <h2>{order.customer.clone()}</h2>
                                <Badge>{order.order_id.clone()}</Badge>
                            </div>
                            <dl class="detail-card__grid">
                                <div class="detail-card__item">
                                    <dt>{icon("tag")} " Category"</dt>
                                    <dd>{category}</dd>
                                </div>
                                <div class="detail-card__item">
                                    <dt>{icon("calendar")} " Date"</dt>
                                    <dd>{format_long_date(&order.date)}</dd>
                                </div>
                                <div class="detail-card__item">
                                    <dt>"Source"</dt>
                                    <dd>{or_na(&order.source)}</dd>
                                </div>
                                <div class="detail-card__item">
                                    <dt>"Location"</dt>
                                    <dd>{or_na(&order.geo)}</dd>
                                </div>
                                <div class="detail-card__item">
                                    <dt>{icon("trending-up")} " Amount"</dt>
                                    <dd class="detail-card__amount">{format_amount(order.amount)}</dd>
                                </div>
                            </dl>
                        </div>
                    }.into_any()
                }
            }}
        </PageFrame>
    }
}

