pub fn inline_css() -> &'static str {
    r#"
:root {
  --cream: #f5f0e8;
  --card-bg: #faf7f2;
  --orange: #c95d2e;
  --mustard: #d4a03c;
  --gold: #e8b923;
  --brown: #3d2c29;
  --brown-light: #5d4c49;
  --shadow: rgba(61, 44, 41, 0.08);
  --shadow-hover: rgba(61, 44, 41, 0.15);
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  min-height: 100vh;
  background: var(--cream);
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--brown);
  line-height: 1.5;
}

.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 24px;
}

/* Header */
.dashboard-header {
  background: var(--card-bg);
  border-radius: 12px;
  padding: 24px 32px;
  margin-bottom: 32px;
  box-shadow: 0 2px 8px var(--shadow);
}

.header-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 16px;
  color: var(--brown);
}

.header-stats {
  display: flex;
  flex-wrap: wrap;
  gap: 32px;
  align-items: flex-end;
}

.header-stat {
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.header-stat-value {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--orange);
}

.header-stat-label {
  font-size: 0.85rem;
  color: var(--brown-light);
}

.header-sparkline {
  flex: 1;
  min-width: 200px;
  display: flex;
  flex-direction: column;
  gap: 4px;
}

.header-sparkline .sparkline {
  width: 100%;
  height: 40px;
}

/* Cards Grid */
.cards-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 24px;
  margin-bottom: 48px;
}

@media (max-width: 900px) {
  .cards-grid {
    grid-template-columns: 1fr;
  }
}

/* Card */
.card-link {
  text-decoration: none;
  color: inherit;
}

.card {
  background: var(--card-bg);
  border-radius: 12px;
  padding: 20px 24px;
  box-shadow: 0 2px 8px var(--shadow);
  transition: transform 0.15s ease, box-shadow 0.15s ease;
}

.card:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 16px var(--shadow-hover);
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 16px;
  padding-bottom: 12px;
  border-bottom: 1px solid rgba(61, 44, 41, 0.1);
}

.repo-name {
  font-size: 1.1rem;
  font-weight: 600;
  color: var(--brown);
}

.repo-stats {
  display: flex;
  gap: 12px;
}

.stat {
  font-size: 0.9rem;
  color: var(--brown-light);
}

.card-body {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 20px;
}

.chart-section {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.chart-label {
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.5px;
  color: var(--brown-light);
}

.chart-label .period {
  font-weight: 400;
  opacity: 0.7;
}

.sparkline {
  width: 100%;
  height: 32px;
}

.chart-stats {
  display: flex;
  gap: 12px;
  font-size: 0.85rem;
}

.views {
  color: var(--orange);
}

.clones {
  color: var(--mustard);
}

.growth.positive {
  color: #2e8b57;
}

.growth.negative {
  color: var(--orange);
}

.neutral {
  color: #999;
}

/* Crickets Section */
.crickets-section {
  margin-top: 48px;
  padding-top: 32px;
  border-top: 1px dashed rgba(61, 44, 41, 0.2);
}

.crickets-header {
  font-size: 1rem;
  font-weight: 500;
  color: var(--brown-light);
  margin-bottom: 16px;
  opacity: 0.7;
}

.crickets-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 12px;
}

@media (max-width: 768px) {
  .crickets-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 480px) {
  .crickets-grid {
    grid-template-columns: 1fr;
  }
}

.cricket-link {
  text-decoration: none;
  color: inherit;
}

.cricket-card {
  background: var(--card-bg);
  border-radius: 8px;
  padding: 12px 16px;
  display: flex;
  align-items: center;
  gap: 8px;
  box-shadow: 0 1px 4px var(--shadow);
  transition: transform 0.15s ease, box-shadow 0.15s ease;
  opacity: 0.75;
}

.cricket-card:hover {
  transform: translateY(-1px);
  box-shadow: 0 2px 8px var(--shadow-hover);
  opacity: 1;
}

.cricket-name {
  flex: 1;
  font-size: 0.9rem;
  font-weight: 500;
  color: var(--brown);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.cricket-stats {
  font-size: 0.8rem;
  color: var(--brown-light);
}

.cricket-arrow {
  color: var(--orange);
  opacity: 0.5;
  transition: opacity 0.15s ease;
}

.cricket-card:hover .cricket-arrow {
  opacity: 1;
}

/* Footer */
.dashboard-footer {
  text-align: center;
  padding: 24px;
  font-size: 0.8rem;
  color: var(--brown-light);
  opacity: 0.6;
}
"#
}
