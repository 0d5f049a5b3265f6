//! Global CSS styles for the DEMORPH site.
//!
//! Dark canvas, Montserrat headings, Poppins body copy.

pub const GLOBAL_STYLES: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Montserrat:wght@500;600;700&family=Poppins:wght@300;400;500&display=swap');

/* === CSS Custom Properties === */
:root {
  --background: #0c0c0f;
  --foreground: #1b1b21;
  --primary: #7c3aed;
  --text-primary: #f5f5f7;

  --font-primary: 'Montserrat', system-ui, sans-serif;
  --font-secondary: 'Poppins', system-ui, sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
  /* Anchor targets clear the absolute navbar */
  scroll-padding-top: 5rem;
}

body {
  margin: 0;
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--font-secondary);
  -webkit-font-smoothing: antialiased;
  overflow-x: hidden;
}

img, svg {
  display: block;
}

::selection {
  background: var(--primary);
  color: var(--text-primary);
}

@media (prefers-reduced-motion: reduce) {
  html {
    scroll-behavior: auto;
  }

  *, *::before, *::after {
    transition-duration: 0.01ms !important;
  }
}
"#;
