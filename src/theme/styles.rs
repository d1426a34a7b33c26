//! Global CSS styles for Storefront.
//!
//! Dark slate storefront aesthetic with a responsive card grid.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-deep: #030712;
  --slate-card: rgba(17, 24, 39, 0.7);
  --slate-border: #1f2937;

  /* INDIGO (Accents, Category Pills) */
  --indigo: #6366f1;
  --indigo-soft: #818cf8;
  --indigo-tint: rgba(79, 70, 229, 0.2);

  /* SEMANTIC */
  --price-green: #4ade80;
  --star-gold: #facc15;
  --danger: #f87171;

  /* TEXT */
  --text-primary: #f9fafb;
  --text-muted: #9ca3af;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--slate-deep);
  color: var(--text-primary);
  font-family: var(--font-sans);
  min-height: 100vh;
}

/* === Page === */
.storefront {
  min-height: 100vh;
  padding: 3rem 1.5rem;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 3rem;
}

/* === Loading State === */
.catalog-loading {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  margin-top: 5rem;
}

.loading-spinner {
  width: 3.5rem;
  height: 3.5rem;
  border: 4px solid var(--indigo);
  border-top-color: transparent;
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

.catalog-loading__caption {
  margin-top: 1rem;
  color: var(--text-muted);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Error State === */
.catalog-error {
  color: var(--danger);
  text-align: center;
  margin-bottom: 1.5rem;
}

/* === Product Grid === */
/* One column on narrow windows, up to four when there is room */
.product-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 2rem;
}

@media (min-width: 640px) {
  .product-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 768px) {
  .product-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1024px) {
  .product-grid { grid-template-columns: repeat(4, 1fr); }
}

/* === Product Card === */
.product-card {
  display: flex;
  flex-direction: column;
  background: var(--slate-card);
  border: 1px solid var(--slate-border);
  border-radius: 1rem;
  padding: 1.25rem;
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.product-card:hover {
  transform: translateY(-0.5rem);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.4);
}

.product-card__image-area {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 11rem;
  background: #ffffff;
  border-radius: 0.75rem;
  margin-bottom: 1rem;
  padding: 1rem;
  overflow: hidden;
}

.product-card__image {
  height: 100%;
  object-fit: contain;
  transition: transform var(--transition-normal);
}

.product-card:hover .product-card__image {
  transform: scale(1.1);
}

.product-card__category {
  align-self: flex-start;
  background: var(--indigo-tint);
  color: var(--indigo-soft);
  font-size: 0.75rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  margin-bottom: 0.75rem;
  text-transform: capitalize;
}

.product-card__title {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.product-card__footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-top: auto;
}

.product-card__price {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--price-green);
}

.product-card__rating {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.product-card__stars {
  color: var(--star-gold);
  font-size: 0.875rem;
}

.product-card__rating-count {
  color: var(--text-muted);
  font-size: 0.875rem;
}
"#;
