use crate::models::GraphResponse;

pub fn render_terms_page(total: usize) -> String {
    with_style(TERMS_HTML).replace("{{TOTAL}}", &total.to_string())
}

pub fn render_form_page(term_id: Option<u64>) -> String {
    let (mode, id, title) = match term_id {
        Some(id) => ("edit", id.to_string(), "Редактирование термина"),
        None => ("create", String::new(), "Новый термин"),
    };
    with_style(FORM_HTML)
        .replace("{{MODE}}", mode)
        .replace("{{TERM_ID}}", &id)
        .replace("{{TITLE}}", title)
}

pub fn render_graph_page(graph: &GraphResponse) -> String {
    let payload = serde_json::to_string(graph)
        .unwrap_or_else(|_| r#"{"nodes":[],"links":[]}"#.to_string());
    // `<` must not appear verbatim inside an inline <script> block.
    with_style(GRAPH_HTML).replace("{{GRAPH_DATA}}", &payload.replace('<', "\\u003c"))
}

fn with_style(template: &str) -> String {
    template.replace("{{STYLE}}", STYLE)
}

const STYLE: &str = r#"
    :root {
      --bg-1: #eef1f8;
      --bg-2: #d5def0;
      --ink: #202636;
      --muted: #5d6575;
      --accent: #3b5fc0;
      --accent-soft: rgba(59, 95, 192, 0.12);
      --danger: #bf4040;
      --card: #ffffff;
      --line: rgba(32, 38, 54, 0.12);
      --shadow: 0 18px 48px rgba(32, 38, 54, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #f6f1e9 90%);
      color: var(--ink);
      font-family: "PT Sans", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 36px 18px 56px;
    }

    .app {
      width: min(920px, 100%);
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: grid;
      gap: 12px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.7rem, 3.5vw, 2.3rem);
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
      font-size: 0.98rem;
    }

    nav {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    nav a {
      text-decoration: none;
      color: var(--muted);
      padding: 7px 14px;
      border-radius: 999px;
      font-size: 0.92rem;
      border: 1px solid transparent;
    }

    nav a:hover {
      color: var(--accent);
      border-color: var(--line);
    }

    nav a.active {
      background: var(--accent-soft);
      color: var(--accent);
      font-weight: 600;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 9px 16px;
      font-size: 0.92rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      gap: 8px;
      background: var(--accent-soft);
      color: var(--accent);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-danger {
      background: transparent;
      color: var(--danger);
      border: 1px solid var(--line);
    }

    .btn:disabled {
      opacity: 0.45;
      cursor: default;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
      justify-content: space-between;
    }

    input, textarea {
      font: inherit;
      color: inherit;
      border: 1px solid var(--line);
      border-radius: 10px;
      padding: 10px 12px;
      background: #fbfbfd;
      width: 100%;
    }

    input:focus, textarea:focus {
      outline: 2px solid var(--accent-soft);
      border-color: var(--accent);
    }

    .search {
      flex: 1;
      min-width: 220px;
    }

    .term-card {
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 16px 18px;
      display: grid;
      gap: 10px;
    }

    .term-head {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      align-items: baseline;
    }

    .term-head h3 {
      margin: 0;
      font-size: 1.15rem;
    }

    .badge {
      background: var(--accent-soft);
      color: var(--accent);
      border-radius: 999px;
      padding: 3px 10px;
      font-size: 0.78rem;
    }

    .definition {
      margin: 0;
      color: var(--ink);
      line-height: 1.5;
    }

    .related {
      margin: 0;
      color: var(--muted);
      font-size: 0.88rem;
    }

    .term-actions {
      display: flex;
      gap: 10px;
    }

    .pager {
      display: flex;
      align-items: center;
      justify-content: center;
      gap: 14px;
      color: var(--muted);
      font-size: 0.92rem;
    }

    .field {
      display: grid;
      gap: 6px;
    }

    .field label {
      font-size: 0.88rem;
      color: var(--muted);
    }

    .form-actions {
      display: flex;
      gap: 12px;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .empty {
      text-align: center;
      color: var(--muted);
      padding: 26px 0;
    }

    .graph-card {
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 10px;
    }

    #graph {
      width: 100%;
      height: auto;
      display: block;
    }

    #graph text {
      font-family: "PT Sans", "Segoe UI", sans-serif;
      font-size: 12px;
      fill: var(--ink);
    }

    .graph-link {
      stroke: rgba(32, 38, 54, 0.25);
      stroke-width: 1.4;
    }

    .graph-node {
      stroke: white;
      stroke-width: 2;
    }

    @media (max-width: 620px) {
      .app {
        padding: 24px 18px;
      }
    }
"#;

const TERMS_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Глоссарий терминов</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Глоссарий терминов</h1>
      <p class="subtitle">Всего терминов: <span id="total">{{TOTAL}}</span></p>
      <nav>
        <a class="active" href="/terms">Глоссарий</a>
        <a href="/terms/create">Добавить термин</a>
        <a href="/graph">Граф связей</a>
      </nav>
    </header>

    <section class="toolbar">
      <input class="search" id="search" type="search" placeholder="Поиск по термину или определению" />
      <a class="btn btn-primary" href="/terms/create">Добавить термин</a>
    </section>

    <section id="terms"></section>

    <section class="pager">
      <button class="btn" id="prev" type="button">Назад</button>
      <span id="page-info"></span>
      <button class="btn" id="next" type="button">Вперёд</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const listEl = document.getElementById('terms');
    const totalEl = document.getElementById('total');
    const statusEl = document.getElementById('status');
    const searchEl = document.getElementById('search');
    const prevEl = document.getElementById('prev');
    const nextEl = document.getElementById('next');
    const pageInfoEl = document.getElementById('page-info');

    const state = { page: 1, perPage: 10, search: '' };
    let searchTimer = null;

    const esc = (value) => String(value ?? '').replace(/[&<>"']/g, (ch) => ({
      '&': '&amp;',
      '<': '&lt;',
      '>': '&gt;',
      '"': '&quot;',
      "'": '&#39;'
    }[ch]));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderList = (data) => {
      totalEl.textContent = data.total;
      const totalPages = Math.max(1, Math.ceil(data.total / state.perPage));
      pageInfoEl.textContent = `Страница ${data.page} из ${totalPages}`;
      prevEl.disabled = data.page <= 1;
      nextEl.disabled = data.page >= totalPages;

      if (!data.terms.length) {
        listEl.innerHTML = '<p class="empty">Ничего не найдено</p>';
        return;
      }

      listEl.innerHTML = data.terms.map((item) => {
        const badge = item.category ? `<span class="badge">${esc(item.category)}</span>` : '';
        const related = item.related_terms && item.related_terms.length
          ? `<p class="related">Связанные термины: ${item.related_terms.map(esc).join(', ')}</p>`
          : '';
        return `
          <article class="term-card">
            <div class="term-head">
              <h3>${esc(item.term)}</h3>
              ${badge}
            </div>
            <p class="definition">${esc(item.definition)}</p>
            ${related}
            <div class="term-actions">
              <a class="btn" href="/terms/${item.id}/edit">Редактировать</a>
              <button class="btn btn-danger" data-id="${item.id}" type="button">Удалить</button>
            </div>
          </article>`;
      }).join('');
    };

    const loadTerms = async () => {
      const params = new URLSearchParams({
        page: state.page.toString(),
        per_page: state.perPage.toString()
      });
      if (state.search) {
        params.append('search', state.search);
      }

      const res = await fetch(`/api/terms?${params}`);
      if (!res.ok) {
        throw new Error(`Не удалось загрузить термины (статус ${res.status})`);
      }
      renderList(await res.json());
    };

    const removeTerm = async (id) => {
      if (!confirm('Удалить термин?')) {
        return;
      }
      const res = await fetch(`/api/terms/${id}`, { method: 'DELETE' });
      if (!res.ok) {
        const body = await res.json().catch(() => null);
        throw new Error((body && body.detail) || 'Ошибка удаления термина');
      }
      setStatus('Термин удалён', 'ok');
      await loadTerms();
    };

    listEl.addEventListener('click', (event) => {
      const button = event.target.closest('button[data-id]');
      if (!button) {
        return;
      }
      removeTerm(button.dataset.id).catch((err) => setStatus(err.message, 'error'));
    });

    searchEl.addEventListener('input', () => {
      clearTimeout(searchTimer);
      searchTimer = setTimeout(() => {
        state.search = searchEl.value.trim();
        state.page = 1;
        loadTerms().catch((err) => setStatus(err.message, 'error'));
      }, 300);
    });

    prevEl.addEventListener('click', () => {
      if (state.page > 1) {
        state.page -= 1;
        loadTerms().catch((err) => setStatus(err.message, 'error'));
      }
    });

    nextEl.addEventListener('click', () => {
      state.page += 1;
      loadTerms().catch((err) => setStatus(err.message, 'error'));
    });

    loadTerms().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

const FORM_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
      <nav>
        <a href="/terms">Глоссарий</a>
        <a class="active" href="/terms/create">Добавить термин</a>
        <a href="/graph">Граф связей</a>
      </nav>
    </header>

    <form id="term-form">
      <div class="field">
        <label for="term">Термин</label>
        <input id="term" name="term" required />
      </div>
      <div class="field">
        <label for="definition">Определение</label>
        <textarea id="definition" name="definition" rows="5" required></textarea>
      </div>
      <div class="field">
        <label for="category">Категория</label>
        <input id="category" name="category" placeholder="Необязательно" />
      </div>
      <div class="field">
        <label for="related">Связанные термины (через запятую)</label>
        <input id="related" name="related" placeholder="Например: HTTP, REST" />
      </div>
      <div class="form-actions">
        <button class="btn btn-primary" id="save" type="submit">Сохранить</button>
        <a class="btn" href="/terms">Отмена</a>
      </div>
    </form>

    <div class="status" id="status"></div>
  </main>

  <script>
    const MODE = '{{MODE}}';
    const TERM_ID = '{{TERM_ID}}';

    const formEl = document.getElementById('term-form');
    const termEl = document.getElementById('term');
    const definitionEl = document.getElementById('definition');
    const categoryEl = document.getElementById('category');
    const relatedEl = document.getElementById('related');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const readRelated = () => relatedEl.value
      .split(',')
      .map((item) => item.trim())
      .filter((item) => item.length > 0);

    const loadTerm = async () => {
      const res = await fetch(`/api/terms/${TERM_ID}`);
      if (!res.ok) {
        const body = await res.json().catch(() => null);
        throw new Error((body && body.detail) || `Не удалось загрузить термин (статус ${res.status})`);
      }
      const term = await res.json();
      termEl.value = term.term;
      definitionEl.value = term.definition;
      categoryEl.value = term.category || '';
      relatedEl.value = (term.related_terms || []).join(', ');
    };

    const saveTerm = async () => {
      const payload = {
        term: termEl.value.trim(),
        definition: definitionEl.value.trim(),
        category: categoryEl.value.trim() || null,
        related_terms: readRelated()
      };

      const url = MODE === 'edit' ? `/api/terms/${TERM_ID}` : '/api/terms';
      const res = await fetch(url, {
        method: MODE === 'edit' ? 'PUT' : 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(payload)
      });

      if (!res.ok) {
        const body = await res.json().catch(() => null);
        const fallback = MODE === 'edit' ? 'Ошибка обновления термина' : 'Ошибка создания термина';
        throw new Error((body && body.detail) || fallback);
      }

      window.location.href = '/terms';
    };

    formEl.addEventListener('submit', (event) => {
      event.preventDefault();
      setStatus('Сохранение...', '');
      saveTerm().catch((err) => setStatus(err.message, 'error'));
    });

    if (MODE === 'edit') {
      loadTerm().catch((err) => setStatus(err.message, 'error'));
    }
  </script>
</body>
</html>
"#;

const GRAPH_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Граф связей</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Граф связей</h1>
      <p class="subtitle">Термины и ссылки между ними из поля «связанные термины».</p>
      <nav>
        <a href="/terms">Глоссарий</a>
        <a href="/terms/create">Добавить термин</a>
        <a class="active" href="/graph">Граф связей</a>
      </nav>
    </header>

    <section class="graph-card">
      <svg id="graph" viewBox="0 0 900 620" role="img" aria-label="Граф связей терминов"></svg>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const GRAPH = {{GRAPH_DATA}};

    const svg = document.getElementById('graph');
    const PALETTE = ['#3b5fc0', '#b06a2c', '#2d7a4b', '#8a4fb5', '#bf4040', '#2c7f8a'];

    const esc = (value) => String(value ?? '').replace(/[&<>"']/g, (ch) => ({
      '&': '&amp;',
      '<': '&lt;',
      '>': '&gt;',
      '"': '&quot;',
      "'": '&#39;'
    }[ch]));

    const render = () => {
      const { nodes, links } = GRAPH;
      if (!nodes.length) {
        svg.innerHTML = '<text x="50%" y="50%" text-anchor="middle">Глоссарий пока пуст</text>';
        return;
      }

      const width = 900;
      const height = 620;
      const cx = width / 2;
      const cy = height / 2;
      const radius = Math.min(width, height) / 2 - 90;

      const positions = new Map();
      nodes.forEach((node, index) => {
        const angle = (2 * Math.PI * index) / nodes.length - Math.PI / 2;
        positions.set(node.id, {
          x: cx + radius * Math.cos(angle),
          y: cy + radius * Math.sin(angle)
        });
      });

      const colors = new Map();
      const colorFor = (category) => {
        const key = category || '';
        if (!colors.has(key)) {
          colors.set(key, PALETTE[colors.size % PALETTE.length]);
        }
        return colors.get(key);
      };

      const lines = links.map((link) => {
        const from = positions.get(link.source);
        const to = positions.get(link.target);
        return `<line class="graph-link" x1="${from.x}" y1="${from.y}" x2="${to.x}" y2="${to.y}" />`;
      }).join('');

      const circles = nodes.map((node) => {
        const point = positions.get(node.id);
        const title = node.category ? `${esc(node.label)} — ${esc(node.category)}` : esc(node.label);
        return `<circle class="graph-node" cx="${point.x}" cy="${point.y}" r="9" fill="${colorFor(node.category)}"><title>${title}</title></circle>`;
      }).join('');

      const labels = nodes.map((node) => {
        const point = positions.get(node.id);
        const anchor = point.x < cx - 1 ? 'end' : 'start';
        const dx = point.x < cx - 1 ? -14 : 14;
        return `<text x="${point.x + dx}" y="${point.y + 4}" text-anchor="${anchor}">${esc(node.label)}</text>`;
      }).join('');

      svg.innerHTML = lines + circles + labels;
    };

    render();
  </script>
</body>
</html>
"#;
