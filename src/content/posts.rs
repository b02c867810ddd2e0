use std::sync::OnceLock;

use chrono::NaiveDate;

use super::Repository;

/// A blog article, keyed by slug. The body is trusted, author-written HTML.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: NaiveDate,
    pub tags: &'static [&'static str],
    pub body: &'static str,
}

static POSTS: OnceLock<Vec<BlogPost>> = OnceLock::new();

fn publish_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid publish date")
}

fn seed() -> Vec<BlogPost> {
    let mut posts = vec![
        BlogPost {
            slug: "getting-started-with-react",
            title: "Getting Started with React Hooks",
            excerpt: "Learn how to use React Hooks to simplify your functional components and manage state effectively.",
            date: publish_date(2023, 5, 15),
            tags: &["React", "JavaScript", "Hooks"],
            body: r##"
      <h1>Getting Started with React Hooks</h1>
      <p>React Hooks have revolutionized the way we write React components. They allow us to use state and other React features without writing a class component.</p>

      <h2>What are React Hooks?</h2>
      <p>Hooks are functions that let you "hook into" React state and lifecycle features from function components. They were introduced in React 16.8 and have since become the standard way to write React components.</p>

      <h2>useState Hook</h2>
      <p>The useState hook allows you to add state to functional components:</p>
      <pre><code class="language-jsx">import React, { useState } from 'react';

function Counter() {
  const [count, setCount] = useState(0);

  return (
    &lt;div&gt;
      &lt;p&gt;You clicked {count} times&lt;/p&gt;
      &lt;button onClick={() =&gt; setCount(count + 1)}&gt;
        Click me
      &lt;/button&gt;
    &lt;/div&gt;
  );
}</code></pre>

      <h2>useEffect Hook</h2>
      <p>The useEffect hook lets you perform side effects in function components:</p>
      <pre><code class="language-jsx">import React, { useState, useEffect } from 'react';

function Example() {
  const [count, setCount] = useState(0);

  // Similar to componentDidMount and componentDidUpdate:
  useEffect(() =&gt; {
    // Update the document title using the browser API
    document.title = `You clicked ${count} times`;
  });

  return (
    &lt;div&gt;
      &lt;p&gt;You clicked {count} times&lt;/p&gt;
      &lt;button onClick={() =&gt; setCount(count + 1)}&gt;
        Click me
      &lt;/button&gt;
    &lt;/div&gt;
  );
}</code></pre>

      <h2>Conclusion</h2>
      <p>React Hooks provide a more direct API to the React concepts you already know: props, state, context, refs, and lifecycle. They offer a powerful and expressive way to compose behavior instead of having to follow the rigid structure of class components.</p>
    "##,
        },
        BlogPost {
            slug: "css-grid-layout",
            title: "Building Responsive Layouts with CSS Grid",
            excerpt: "A comprehensive guide to creating flexible and responsive layouts using CSS Grid.",
            date: publish_date(2023, 4, 22),
            tags: &["CSS", "Layout", "Responsive Design"],
            body: r##"
      <h1>Building Responsive Layouts with CSS Grid</h1>
      <p>CSS Grid is a powerful layout system that allows you to create complex, responsive layouts with ease. It's a two-dimensional system, meaning it can handle both columns and rows, unlike Flexbox which is largely a one-dimensional system.</p>

      <h2>What is CSS Grid?</h2>
      <p>CSS Grid Layout is a two-dimensional layout system for the web. It lets you lay content out in rows and columns, and has many features that make building complex layouts straightforward.</p>

      <h2>Basic Concepts</h2>
      <h3>Grid Container</h3>
      <p>To create a grid container, you need to set the display property to grid or inline-grid:</p>
      <pre><code class="language-css">.container {
  display: grid;
}</code></pre>

      <h3>Grid Items</h3>
      <p>Direct children of a grid container automatically become grid items:</p>
      <pre><code class="language-html">&lt;div class="container"&gt;
  &lt;div class="item"&gt;Item 1&lt;/div&gt;
  &lt;div class="item"&gt;Item 2&lt;/div&gt;
  &lt;div class="item"&gt;Item 3&lt;/div&gt;
&lt;/div&gt;</code></pre>

      <h2>Creating Columns and Rows</h2>
      <p>You can define columns and rows using the grid-template-columns and grid-template-rows properties:</p>
      <pre><code class="language-css">.container {
  display: grid;
  grid-template-columns: 200px 200px 200px;
  grid-template-rows: 100px 100px;
}</code></pre>

      <p>Or using the fr unit for flexible layouts:</p>
      <pre><code class="language-css">.container {
  display: grid;
  grid-template-columns: 1fr 1fr 1fr;
  grid-template-rows: 100px 100px;
}</code></pre>

      <h2>Grid Gap</h2>
      <p>You can add gaps between grid items using grid-gap, row-gap, or column-gap:</p>
      <pre><code class="language-css">.container {
  display: grid;
  grid-template-columns: 1fr 1fr 1fr;
  grid-gap: 20px;
}</code></pre>

      <h2>Responsive Grids</h2>
      <p>CSS Grid makes responsive design incredibly easy. You can use media queries or the repeat() function with auto-fit or auto-fill:</p>
      <pre><code class="language-css">.container {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
  grid-gap: 20px;
}</code></pre>

      <h2>Conclusion</h2>
      <p>CSS Grid is an incredibly powerful tool for creating complex layouts with minimal code. It provides precise control over how elements are positioned and sized, making it perfect for everything from simple card layouts to complex dashboard interfaces.</p>
    "##,
        },
    ];

    // Listing order is newest first.
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

/// All posts, newest first.
pub fn posts() -> &'static [BlogPost] {
    POSTS.get_or_init(seed)
}

pub fn post(slug: &str) -> Option<&'static BlogPost> {
    posts().iter().find(|p| p.slug == slug)
}

pub struct PostStore;

impl Repository for PostStore {
    type Key = str;
    type Record = BlogPost;

    fn get(&self, key: &str) -> Option<&BlogPost> {
        post(key)
    }

    fn list(&self) -> &[BlogPost] {
        posts()
    }
}
