use deal_commerce::catalog::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryGrid(categories: Vec<Category>) -> impl IntoView {
    view! {
        <div class="categories">
            {categories.into_iter().map(|category| {
                let href = category.href();
                let icon = category.icon();
                view! {
                    <a class="category-tile" href=href>
                        <span class="category-icon">{icon}</span>
                        <span class="category-name">{category.name}</span>
                        {category.description.map(|d| view! { <span class="category-description">{d}</span> })}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
