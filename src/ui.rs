pub fn render_index(date: &str, mood: Option<&str>) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{MOOD}}", &escape_html(mood.unwrap_or("not logged yet")))
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe3f3;
      --ink: #26323c;
      --accent: #5b8def;
      --accent-2: #34495e;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(52, 73, 94, 0.16);
      --mood-happy: #ffd166;
      --mood-calm: #8fd6bd;
      --mood-meh: #cfd4da;
      --mood-sad: #8aa9d6;
      --mood-angry: #ef7a6d;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e3ecf5 60%, #f2f6fa 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5d6a76;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(52, 73, 94, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b95a0;
    }

    .stat .value {
      font-size: 1.4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(120px, 1fr));
      gap: 12px;
    }

    .mood-form {
      display: contents;
    }

    .mood-btn {
      appearance: none;
      border: 1px solid rgba(52, 73, 94, 0.12);
      background: white;
      border-radius: 16px;
      padding: 14px 10px;
      font-size: 1rem;
      font-weight: 600;
      font-family: inherit;
      color: var(--accent-2);
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .mood-btn:active {
      transform: scale(0.97);
    }

    .mood-btn:hover {
      box-shadow: 0 10px 24px rgba(91, 141, 239, 0.22);
    }

    .views-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .views-header h2 {
      margin: 0;
      font-size: 1.4rem;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(52, 73, 94, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      font-weight: 600;
      font-family: inherit;
      color: #68727c;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(52, 73, 94, 0.12);
    }

    .view-card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(52, 73, 94, 0.08);
    }

    .view-card.hidden {
      display: none;
    }

    .mood-entry {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 6px;
      border-bottom: 1px solid rgba(52, 73, 94, 0.08);
    }

    .mood-entry:last-child {
      border-bottom: none;
    }

    .mood-entry .when {
      color: #5d6a76;
    }

    .mood-entry .what {
      font-weight: 600;
      color: var(--accent-2);
    }

    .placeholder {
      margin: 6px;
      color: #8b95a0;
    }

    .calendar-title {
      margin: 0 0 12px;
      font-size: 1.05rem;
      color: #5d6a76;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .calendar-day {
      aspect-ratio: 1;
      border-radius: 12px;
      display: grid;
      place-items: center;
      font-size: 0.95rem;
      background: rgba(52, 73, 94, 0.04);
    }

    .calendar-day.blank {
      background: transparent;
    }

    .calendar-day.mood-happy { background: var(--mood-happy); }
    .calendar-day.mood-calm { background: var(--mood-calm); }
    .calendar-day.mood-meh { background: var(--mood-meh); }
    .calendar-day.mood-sad { background: var(--mood-sad); }
    .calendar-day.mood-angry { background: var(--mood-angry); }

    .status {
      font-size: 0.95rem;
      color: #68727c;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hint {
      margin: 0;
      color: #6f7984;
      font-size: 0.9rem;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Mood Tracker</h1>
      <p class="subtitle">One mood per day. Pick again to change your mind.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Date</span>
        <span id="date" class="value">{{DATE}}</span>
      </div>
      <div class="stat">
        <span class="label">Today's mood</span>
        <span id="mood" class="value">{{MOOD}}</span>
      </div>
    </section>

    <section class="moods">
      <form class="mood-form" method="post" action="/mood/happy" data-mood="happy">
        <button class="mood-btn" type="submit">&#128522; Happy</button>
      </form>
      <form class="mood-form" method="post" action="/mood/calm" data-mood="calm">
        <button class="mood-btn" type="submit">&#128524; Calm</button>
      </form>
      <form class="mood-form" method="post" action="/mood/meh" data-mood="meh">
        <button class="mood-btn" type="submit">&#128528; Meh</button>
      </form>
      <form class="mood-form" method="post" action="/mood/sad" data-mood="sad">
        <button class="mood-btn" type="submit">&#128546; Sad</button>
      </form>
      <form class="mood-form" method="post" action="/mood/angry" data-mood="angry">
        <button class="mood-btn" type="submit">&#128544; Angry</button>
      </form>
    </section>

    <section>
      <div class="views-header">
        <h2>History</h2>
        <div class="tabs" role="tablist">
          <button class="tab active" type="button" data-view="timeline" role="tab" aria-selected="true">Timeline</button>
          <button class="tab" type="button" data-view="calendar" role="tab" aria-selected="false">Calendar</button>
        </div>
      </div>
    </section>

    <section id="timeline-container" class="view-card"></section>
    <section id="calendar-container" class="view-card hidden"></section>

    <div class="status" id="status"></div>
    <p class="hint">Moods are kept per calendar day (server time) and saved to a local file.</p>
  </main>

  <script>
    const dateEl = document.getElementById('date');
    const moodEl = document.getElementById('mood');
    const statusEl = document.getElementById('status');
    const timelineEl = document.getElementById('timeline-container');
    const calendarEl = document.getElementById('calendar-container');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const moodForms = Array.from(document.querySelectorAll('.mood-form'));

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const updateToday = (data) => {
      dateEl.textContent = data.date;
      moodEl.textContent = data.mood || 'not logged yet';
    };

    const moodClass = (mood) => 'mood-' + mood.toLowerCase().replace(/[^a-z0-9_-]/g, '-');

    const renderTimeline = (data) => {
      timelineEl.innerHTML = '';

      if (data.rows.length === 0) {
        const empty = document.createElement('p');
        empty.classList.add('placeholder');
        empty.textContent = 'No moods logged yet.';
        timelineEl.appendChild(empty);
        return;
      }

      data.rows.forEach((row) => {
        const entry = document.createElement('div');
        entry.classList.add('mood-entry');
        const when = document.createElement('span');
        when.classList.add('when');
        when.textContent = row.display_date;
        const what = document.createElement('span');
        what.classList.add('what');
        what.textContent = row.mood;
        entry.appendChild(when);
        entry.appendChild(what);
        timelineEl.appendChild(entry);
      });
    };

    const renderCalendar = (data) => {
      calendarEl.innerHTML = '';

      const title = document.createElement('p');
      title.classList.add('calendar-title');
      title.textContent = data.title;
      calendarEl.appendChild(title);

      const grid = document.createElement('div');
      grid.classList.add('calendar');

      for (let i = 0; i < data.leading_blanks; i += 1) {
        const blank = document.createElement('div');
        blank.classList.add('calendar-day', 'blank');
        grid.appendChild(blank);
      }

      data.days.forEach((cell) => {
        const day = document.createElement('div');
        day.classList.add('calendar-day');
        day.textContent = cell.day;
        if (cell.mood) {
          day.classList.add(moodClass(cell.mood));
          day.title = cell.mood;
        }
        grid.appendChild(day);
      });

      calendarEl.appendChild(grid);
    };

    const setActiveView = (view) => {
      timelineEl.classList.toggle('hidden', view !== 'timeline');
      calendarEl.classList.toggle('hidden', view !== 'calendar');
      tabs.forEach((button) => {
        const isActive = button.dataset.view === view;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
    };

    const loadToday = async () => {
      const res = await fetch('/api/today');
      if (!res.ok) {
        throw new Error('Unable to load today data');
      }
      updateToday(await res.json());
    };

    const loadViews = async () => {
      const [timelineRes, calendarRes] = await Promise.all([
        fetch('/api/timeline'),
        fetch('/api/calendar')
      ]);
      if (!timelineRes.ok || !calendarRes.ok) {
        throw new Error('Unable to load mood history');
      }
      renderTimeline(await timelineRes.json());
      renderCalendar(await calendarRes.json());
    };

    const refresh = async () => {
      await Promise.all([loadToday(), loadViews()]);
    };

    const send = async (mood) => {
      setStatus('Saving...', 'info');
      const res = await fetch('/api/mood', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood })
      });

      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }

      updateToday(await res.json());
      await loadViews();
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveView(button.dataset.view));
    });

    moodForms.forEach((form) => {
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        send(form.dataset.mood).catch((err) => setStatus(err.message, 'error'));
      });
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
